use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{resolve_all, BrickSelector};
use crate::wall::Wall;

/// Full details of the selected bricks, in the order they were asked for.
///
/// Viewing is read-only: `view_count` is owned by whatever tracks views and is
/// not bumped here.
pub fn run(wall: &Wall, selectors: &[BrickSelector]) -> Result<CmdResult> {
    let found = resolve_all(wall, selectors)?;
    Ok(CmdResult::default().with_listed_bricks(found))
}
