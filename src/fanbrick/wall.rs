use crate::error::{FanbrickError, Result};
use crate::model::Brick;

/// A snapshot of every brick on the wall, in insertion order.
///
/// Commands never mutate a wall they are handed; they build the next snapshot
/// and return it, leaving the API to swap it in and persist it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wall {
    bricks: Vec<Brick>,
}

impl Wall {
    pub fn new(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Returns a new wall with `brick` appended. Ids must stay unique.
    pub fn with_brick(&self, brick: Brick) -> Result<Wall> {
        if self.get(&brick.id).is_some() {
            return Err(FanbrickError::Api(format!(
                "A brick with id {} is already on the wall",
                brick.id
            )));
        }
        let mut bricks = self.bricks.clone();
        bricks.push(brick);
        Ok(Wall { bricks })
    }

    /// Returns a new wall where the brick with `id` has been passed through `f`.
    /// `None` when no brick has that id.
    pub fn with_updated<F>(&self, id: &str, f: F) -> Option<Wall>
    where
        F: FnOnce(&mut Brick),
    {
        let pos = self.bricks.iter().position(|b| b.id == id)?;
        let mut bricks = self.bricks.clone();
        f(&mut bricks[pos]);
        Some(Wall { bricks })
    }
}
