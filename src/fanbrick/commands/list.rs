use crate::commands::{CmdMessage, CmdResult};
use crate::index::attach_indexes;
use crate::query::{query, QueryConfig};
use crate::wall::Wall;

pub fn run(wall: &Wall, config: &QueryConfig) -> CmdResult {
    let matched = query(wall.bricks(), config);
    let mut result = CmdResult::default();

    if matched.is_empty() && !wall.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No bricks match the current filters ({} on the wall)",
            wall.len()
        )));
    }

    result.with_listed_bricks(attach_indexes(wall, matched))
}
