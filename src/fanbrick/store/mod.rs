//! # Storage Layer
//!
//! The wall is persisted as a single named entry holding the JSON encoding of
//! every brick, the same shape the browser app kept under `fanBricks` in local
//! storage. [`DataStore`] abstracts where that entry lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, one JSON file in the data directory
//!   ```text
//!   <data dir>/
//!   ├── fanBricks.json   # the whole wall (JSON array)
//!   └── config.json      # FanbrickConfig
//!   ```
//! - [`memory::InMemoryStore`]: no persistence, for tests. Can be told to fail
//!   saves so best-effort persistence paths are testable.
//!
//! Persistence is best effort. A failed save is reported to the caller, but
//! the API keeps the in-memory wall it already switched to.

use crate::error::Result;
use crate::model::Brick;

pub mod fs;
pub mod memory;

/// Name of the single entry holding the serialized wall.
pub const WALL_ENTRY: &str = "fanBricks";

pub trait DataStore {
    /// Reads the stored wall. `None` when nothing has ever been saved.
    fn load(&self) -> Result<Option<Vec<Brick>>>;

    /// Replaces the stored wall with `bricks`.
    fn save(&mut self, bricks: &[Brick]) -> Result<()>;
}
