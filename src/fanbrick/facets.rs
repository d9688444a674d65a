use crate::model::Brick;
use std::collections::BTreeSet;

/// Distinct emotions and tags present on a wall, used to offer filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub emotions: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl Facets {
    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty() && self.tags.is_empty()
    }
}

pub fn extract(bricks: &[Brick]) -> Facets {
    let mut facets = Facets::default();
    for brick in bricks {
        if let Some(emotion) = &brick.emotion {
            facets.emotions.insert(emotion.clone());
        }
        facets.tags.extend(brick.tags.iter().cloned());
    }
    facets
}
