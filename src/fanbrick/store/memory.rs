use super::DataStore;
use crate::error::{FanbrickError, Result};
use crate::model::Brick;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    bricks: Option<Vec<Brick>>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bricks(bricks: Vec<Brick>) -> Self {
        Self {
            bricks: Some(bricks),
            ..Self::default()
        }
    }

    /// Makes every subsequent `save` fail, as a full or read-only disk would.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&[Brick]> {
        self.bricks.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Brick>>> {
        Ok(self.bricks.clone())
    }

    fn save(&mut self, bricks: &[Brick]) -> Result<()> {
        if self.fail_saves {
            return Err(FanbrickError::Persistence("storage unavailable".into()));
        }
        self.bricks = Some(bricks.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ColorToken, Position};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// 2024-03-10T12:00:00Z, a fixed "now" for deterministic tests.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: usize,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_bricks(Vec::new()),
                next_id: 1,
            }
        }

        fn push(mut self, edit: impl FnOnce(&mut Brick)) -> Self {
            let id = self.next_id;
            self.next_id += 1;
            let mut brick = Brick {
                id: format!("b{}", id),
                author_email: format!("fan{}@example.com", id),
                memory: format!("Memory number {}", id),
                image_ref: None,
                color: ColorToken::Primary,
                club: None,
                position: Position { x: 1, y: 1 },
                ai_quote: None,
                emotion: None,
                created_at: fixed_now() - Duration::hours(id as i64),
                is_favorite: false,
                tags: Vec::new(),
                view_count: 0,
            };
            edit(&mut brick);
            let mut bricks = self.store.bricks.take().unwrap_or_default();
            bricks.push(brick);
            self.store.bricks = Some(bricks);
            self
        }

        pub fn with_bricks(mut self, count: usize) -> Self {
            for _ in 0..count {
                self = self.push(|_| {});
            }
            self
        }

        pub fn with_brick(self, memory: &str) -> Self {
            self.push(|b| b.memory = memory.to_string())
        }

        pub fn with_favorite_brick(self, memory: &str) -> Self {
            self.push(|b| {
                b.memory = memory.to_string();
                b.is_favorite = true;
            })
        }

        pub fn with_tagged_brick(self, memory: &str, emotion: &str, tags: &[&str]) -> Self {
            self.push(|b| {
                b.memory = memory.to_string();
                b.emotion = Some(emotion.to_string());
                b.tags = tags.iter().map(|t| t.to_string()).collect();
            })
        }

        pub fn with_brick_at(self, memory: &str, created_at: DateTime<Utc>) -> Self {
            self.push(|b| {
                b.memory = memory.to_string();
                b.created_at = created_at;
            })
        }

        /// A store that has never been written to.
        pub fn empty_storage() -> InMemoryStore {
            InMemoryStore::new()
        }
    }
}
