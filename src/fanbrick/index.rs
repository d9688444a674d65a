//! # Display Indexes
//!
//! Brick ids are UUIDs (or the short numeric ids of demo data), which are
//! awkward to type. The CLI therefore shows every brick with a display index:
//! its 1-based position on the wall in insertion order.
//!
//! Because bricks are never removed and new ones are appended, a brick's
//! index never changes once assigned, whatever filter or sort a listing uses.
//! A listing sorted by popularity may show `3. 1. 2.` and each number still
//! refers to the same brick next time.
//!
//! Users may pass either form; [`BrickSelector`] parses a bare positive integer
//! as an index and anything else as an id. Ids that happen to be numeric
//! (the demo bricks use "1", "2", "3") are still reachable since the index
//! lookup falls back to an id match.

use crate::error::{FanbrickError, Result};
use crate::model::Brick;
use crate::wall::Wall;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBrick {
    pub index: usize,
    pub brick: Brick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrickSelector {
    Index(usize),
    Id(String),
}

impl BrickSelector {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(n) if n > 0 => BrickSelector::Index(n),
            _ => BrickSelector::Id(input.to_string()),
        }
    }
}

impl fmt::Display for BrickSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrickSelector::Index(n) => write!(f, "{}", n),
            BrickSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

/// Pairs each wall brick with its display index.
pub fn index_bricks(wall: &Wall) -> Vec<DisplayBrick> {
    wall.bricks()
        .iter()
        .enumerate()
        .map(|(i, brick)| DisplayBrick {
            index: i + 1,
            brick: brick.clone(),
        })
        .collect()
}

/// Attaches display indexes to an already filtered/sorted list, keeping its order.
pub fn attach_indexes(wall: &Wall, bricks: Vec<Brick>) -> Vec<DisplayBrick> {
    let positions: HashMap<&str, usize> = wall
        .bricks()
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id.as_str(), i + 1))
        .collect();

    bricks
        .into_iter()
        .map(|brick| DisplayBrick {
            index: positions.get(brick.id.as_str()).copied().unwrap_or(0),
            brick,
        })
        .collect()
}

/// Resolves one selector to a brick on the wall.
pub fn resolve(wall: &Wall, selector: &BrickSelector) -> Option<DisplayBrick> {
    let indexed = index_bricks(wall);
    match selector {
        BrickSelector::Index(n) => indexed
            .iter()
            .find(|db| db.index == *n)
            .or_else(|| indexed.iter().find(|db| db.brick.id == n.to_string()))
            .cloned(),
        BrickSelector::Id(id) => indexed.into_iter().find(|db| &db.brick.id == id),
    }
}

/// Resolves every selector, failing on the first one that matches nothing.
pub fn resolve_all(wall: &Wall, selectors: &[BrickSelector]) -> Result<Vec<DisplayBrick>> {
    selectors
        .iter()
        .map(|s| {
            resolve(wall, s).ok_or_else(|| FanbrickError::BrickNotFound(s.to_string()))
        })
        .collect()
}
