//! # API Facade
//!
//! `FanbrickApi` is the single entry point for every UI. It owns the three
//! pieces of state an application session needs:
//!
//! - the [`DataStore`] the wall is mirrored to,
//! - the current [`Wall`] snapshot,
//! - the random source used when bricks are created.
//!
//! Reads (`list`, `calendar`, `facets`, `view`) run a command against the
//! current snapshot. Writes (`submit`, `toggle_favorite`) run a command, swap
//! in the wall it returns, then save the whole wall.
//!
//! ## Best-effort persistence
//!
//! A failed save does not undo the change: the new wall stays current, the
//! failure is logged at `warn` and a warning message is appended to the
//! result. Validation failures, by contrast, are returned as errors and leave
//! the wall untouched.
//!
//! ## Generic over DataStore and Rng
//!
//! Production uses `FanbrickApi<FileStore, StdRng>` seeded from entropy; tests
//! use `InMemoryStore` with a seeded `StdRng` so created bricks are
//! reproducible.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::FanbrickConfig;
use crate::error::Result;
use crate::index::BrickSelector;
use crate::model::demo_bricks;
use crate::query::QueryConfig;
use crate::store::DataStore;
use crate::wall::Wall;
use chrono::{Local, NaiveDate, Utc};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct FanbrickApi<S: DataStore, R: Rng> {
    store: S,
    rng: R,
    wall: Wall,
    config: FanbrickConfig,
    data_dir: PathBuf,
    notices: Vec<CmdMessage>,
}

impl<S: DataStore, R: Rng> FanbrickApi<S, R> {
    /// Loads the wall from `store`. A store that has never been written is
    /// seeded with the demo bricks when `config.seed_demo` is set.
    pub fn open(store: S, rng: R, config: FanbrickConfig, data_dir: PathBuf) -> Result<Self> {
        let mut api = Self {
            store,
            rng,
            wall: Wall::default(),
            config,
            data_dir,
            notices: Vec::new(),
        };

        match api.store.load()? {
            Some(bricks) => {
                debug!(count = bricks.len(), "wall loaded");
                api.wall = Wall::new(bricks);
            }
            None if api.config.seed_demo => {
                info!("no stored wall, seeding demo bricks");
                api.wall = Wall::new(demo_bricks(Utc::now()));
                let mut seeded = CmdResult::default();
                api.persist(&mut seeded);
                api.notices = seeded.messages;
            }
            None => debug!("no stored wall, starting empty"),
        }

        Ok(api)
    }

    /// Messages produced while opening (e.g. the demo wall could not be
    /// saved). Drained on first call.
    pub fn take_notices(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.notices)
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn config(&self) -> &FanbrickConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn submit_brick(&mut self, mut draft: commands::submit::BrickDraft) -> Result<CmdResult> {
        draft
            .author_email
            .get_or_insert_with(|| self.config.author_email.clone());
        let result = commands::submit::run(&self.wall, &draft, &mut self.rng, Utc::now())?;
        Ok(self.apply(result))
    }

    /// Toggles the brick with exactly this id. Unknown ids change nothing.
    pub fn toggle_favorite(&mut self, id: &str) -> CmdResult {
        let selector = BrickSelector::Id(id.to_string());
        let result = commands::favorite::run(&self.wall, std::slice::from_ref(&selector));
        self.apply(result)
    }

    /// Toggles bricks given as display indexes or ids.
    pub fn toggle_favorites<I: AsRef<str>>(&mut self, inputs: &[I]) -> CmdResult {
        let selectors = parse_selectors(inputs);
        let result = commands::favorite::run(&self.wall, &selectors);
        self.apply(result)
    }

    pub fn list(&self, query: &QueryConfig) -> CmdResult {
        commands::list::run(&self.wall, query)
    }

    /// Calendar for the month containing `month`, in the viewer's local time zone.
    pub fn calendar(
        &self,
        query: &QueryConfig,
        month: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> CmdResult {
        commands::calendar::run(&self.wall, query, month, selected, &Local)
    }

    pub fn facets(&self) -> CmdResult {
        commands::facets::run(&self.wall)
    }

    pub fn view<I: AsRef<str>>(&self, inputs: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(inputs);
        commands::view::run(&self.wall, &selectors)
    }

    pub fn configure(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.data_dir)
    }

    fn apply(&mut self, mut result: CmdResult) -> CmdResult {
        if let Some(next) = result.next_wall.take() {
            self.wall = next;
            self.persist(&mut result);
        }
        result
    }

    fn persist(&mut self, result: &mut CmdResult) {
        match self.store.save(self.wall.bricks()) {
            Ok(()) => debug!(count = self.wall.len(), "wall saved"),
            Err(e) => {
                warn!(error = %e, "could not save wall, keeping in-memory changes");
                result.add_message(CmdMessage::warning(format!(
                    "Change kept for this session but not saved: {}",
                    e
                )));
            }
        }
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<BrickSelector> {
    inputs
        .iter()
        .map(|s| BrickSelector::parse(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::submit::BrickDraft;
pub use crate::commands::{CalendarMonth, MessageLevel};
pub use crate::query::SortOrder;
