//! wordgrid-core — word search over a letter grid.
//!
//! This crate holds the search engine and the configuration types shared by
//! the HTTP service and the binary.
//!
//! # Architecture
//!
//! ```text
//! rows ──► Grid ──► GridSearchEngine::rank ──► Vec<Match> ──► find ──► Vec<String>
//! ```
//!
//! Everything here is synchronous and free of I/O apart from config loading.
//! An engine owns its grid and never mutates it, so each request builds its
//! own engine and no state is shared between searches.

pub mod config;
pub mod engine;
pub mod grid;
pub mod types;

pub use engine::{GridSearchEngine, WordFinder};
pub use grid::{fold, Grid, InvalidGrid};
pub use types::{Match, RESULT_LIMIT};
