use crate::commands::{CmdMessage, CmdResult};
use crate::index::{resolve, BrickSelector};
use crate::model::Brick;
use crate::wall::Wall;

/// Flips `is_favorite` on the brick with `id`.
///
/// Returns the next wall and the updated brick, or `None` if no brick has
/// that id. An unknown id is not an error; the wall is simply unchanged.
pub fn toggle(wall: &Wall, id: &str) -> Option<(Wall, Brick)> {
    let next = wall.with_updated(id, |b| b.is_favorite = !b.is_favorite)?;
    let brick = next.get(id)?.clone();
    Some((next, brick))
}

/// Toggles every selected brick in turn. Selectors that match nothing are
/// reported as info messages and skipped.
pub fn run(wall: &Wall, selectors: &[BrickSelector]) -> CmdResult {
    let mut result = CmdResult::default();
    let mut current = wall.clone();
    let mut changed = false;

    for selector in selectors {
        let Some(found) = resolve(&current, selector) else {
            result.add_message(CmdMessage::info(format!(
                "No brick matches {}, nothing changed",
                selector
            )));
            continue;
        };

        if let Some((next, brick)) = toggle(&current, &found.brick.id) {
            let verb = if brick.is_favorite {
                "Favorited"
            } else {
                "Unfavorited"
            };
            result.add_message(CmdMessage::success(format!(
                "{} brick {}: {}",
                verb, found.index, brick.memory
            )));
            result.affected_bricks.push(brick);
            current = next;
            changed = true;
        }
    }

    if changed {
        result.next_wall = Some(current);
    }
    result
}
