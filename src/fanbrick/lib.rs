//! # FanBrick Architecture
//!
//! FanBrick is a wall of football memories. Visitors post short texts as
//! colored bricks, then browse the wall as a list or by calendar day, filter
//! it by search text, emotion, tag and favorites, and sort it.
//!
//! The crate is a **UI-agnostic library** with a terminal client on top. The
//! browser app it descends from kept everything in component state; here the
//! same behavior is split into layers that return plain Rust values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders wall/calendar/detail views     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, current Wall snapshot, random source         │
//! │  - Swaps in new snapshots and saves them (best effort)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - &Wall in, CmdResult (and maybe the next Wall) out        │
//! │  - Built on query, facets, calendar, index                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole wall              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pure core
//!
//! [`query`], [`facets`] and [`calendar`] are total functions over a slice of
//! bricks. They never fail, never mutate their input, and are happy with an
//! empty wall.
//!
//! ## Testing Strategy
//!
//! Most tests live next to the code in `#[cfg(test)]` modules: the pure core
//! and each command are tested directly, the API is tested against
//! `InMemoryStore` with a seeded `StdRng`. `tests/` drives the binary end to
//! end against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: Filtering and sorting
//! - [`facets`]: Distinct emotions and tags for filter choices
//! - [`calendar`]: Grouping bricks by calendar day
//! - [`index`]: Display indexes used by the CLI
//! - [`wall`]: The brick collection snapshot
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Brick`, `ColorToken`, `Club`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod facets;
pub mod index;
pub mod model;
pub mod query;
pub mod store;
pub mod wall;
