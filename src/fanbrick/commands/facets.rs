use crate::commands::{CmdMessage, CmdResult};
use crate::facets::extract;
use crate::wall::Wall;

pub fn run(wall: &Wall) -> CmdResult {
    let facets = extract(wall.bricks());
    let mut result = CmdResult::default();
    if facets.is_empty() {
        result.add_message(CmdMessage::info("No emotions or tags to filter by yet"));
    }
    result.with_facets(facets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_bricks;
    use chrono::Utc;

    #[test]
    fn reports_facets_of_the_wall() {
        let result = run(&Wall::new(demo_bricks(Utc::now())));
        let facets = result.facets.unwrap();
        assert_eq!(facets.emotions.len(), 3);
        assert_eq!(facets.tags.len(), 6);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_wall_gets_a_hint() {
        let result = run(&Wall::default());
        assert!(result.facets.unwrap().is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
