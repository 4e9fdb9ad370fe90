//! wordgrid — find and rank the words hidden in a letter grid.
//!
//! The binary wires the two library crates together and exposes them as
//! subcommands. The modules are public so integration harnesses can drive
//! the CLI without spawning a process.
//!
//! # Architecture
//!
//! ```text
//!            ┌──► wordgrid serve ──► wordgrid-http ──┐
//! Cli ───────┤                                       ├──► wordgrid-core
//!            └──► wordgrid find ─────────────────────┘
//! ```
//!
//! Each search builds its own `GridSearchEngine` and discards it afterwards.

pub mod cli;
pub mod logging;

pub use wordgrid_core::{GridSearchEngine, InvalidGrid, Match, WordFinder, RESULT_LIMIT};
