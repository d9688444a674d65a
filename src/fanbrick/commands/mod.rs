//! # Command Layer
//!
//! Business logic for every fanbrick operation. Commands take the current
//! [`Wall`] snapshot by reference and never mutate it: a command that changes
//! the wall returns the next snapshot in [`CmdResult::next_wall`] and the API
//! decides when to swap it in and persist it.
//!
//! Commands do no terminal I/O. They return bricks, calendar cells and
//! [`CmdMessage`]s for a UI to render however it likes.

use crate::calendar::DayCell;
use crate::config::FanbrickConfig;
use crate::facets::Facets;
use crate::index::DisplayBrick;
use crate::model::Brick;
use crate::wall::Wall;
use chrono::NaiveDate;

pub mod calendar;
pub mod config;
pub mod facets;
pub mod favorite;
pub mod init;
pub mod list;
pub mod submit;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A month of the calendar plus the bricks of the selected day, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    /// First day of the month shown.
    pub month: NaiveDate,
    pub cells: Vec<DayCell>,
    pub selected: Option<NaiveDate>,
    pub selected_bricks: Vec<DisplayBrick>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_bricks: Vec<Brick>,
    pub listed_bricks: Vec<DisplayBrick>,
    pub calendar: Option<CalendarMonth>,
    pub facets: Option<Facets>,
    pub config: Option<FanbrickConfig>,
    pub messages: Vec<CmdMessage>,
    /// The wall after this command, when the command changed it.
    pub next_wall: Option<Wall>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_bricks(mut self, bricks: Vec<Brick>) -> Self {
        self.affected_bricks = bricks;
        self
    }

    pub fn with_listed_bricks(mut self, bricks: Vec<DisplayBrick>) -> Self {
        self.listed_bricks = bricks;
        self
    }

    pub fn with_calendar(mut self, calendar: CalendarMonth) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_config(mut self, config: FanbrickConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_next_wall(mut self, wall: Wall) -> Self {
        self.next_wall = Some(wall);
        self
    }
}
