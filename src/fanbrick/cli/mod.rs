//! # CLI Layer
//!
//! One possible UI for fanbrick. This is the only place that parses shell
//! arguments, installs the log subscriber, writes to the terminal and picks
//! the process exit code. Everything it shows comes from a `CmdResult`
//! returned by [`fanbrick::api::FanbrickApi`].
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `render`: turns bricks, calendars and messages into terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
