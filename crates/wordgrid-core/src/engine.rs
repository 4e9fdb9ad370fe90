//! Search engine — counts, ranks and caps the words found in a [`Grid`].
//!
//! A search runs in three steps:
//!
//! ```text
//! words ──► lower-case + dedup ──► count per word ──► rank + cap
//! ```
//!
//! Counting sums overlapping occurrences over every row (left to right) and
//! every column (top to bottom). Ranking is count descending, then word
//! ascending by code point. At most [`RESULT_LIMIT`] words come back.

use std::collections::HashSet;

use crate::grid::{fold, Grid, InvalidGrid};
use crate::types::{Match, RESULT_LIMIT};

/// The single capability a caller needs: search a word stream.
pub trait WordFinder {
    /// Return the words of `words` found in the grid, best first.
    fn find<S: AsRef<str>>(&self, words: &[S]) -> Vec<String>;
}

/// Searches one immutable grid. Cheap to build; construct one per request.
#[derive(Debug, Clone)]
pub struct GridSearchEngine {
    grid: Grid,
}

impl GridSearchEngine {
    /// Build an engine over `rows`, top to bottom.
    ///
    /// Fails with [`InvalidGrid`] when there are no rows or the rows differ in
    /// length. Alphabetic content and size bounds are the caller's job.
    pub fn new<I, S>(rows: I) -> Result<Self, InvalidGrid>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Grid::new(rows).map(Self::from_grid)
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Total occurrences of `word` (folded first) in the grid.
    pub fn occurrences(&self, word: &str) -> usize {
        let word: Vec<char> = fold(word).collect();
        self.grid.count(&word)
    }

    /// Ranked matches with their counts, best first, capped at
    /// [`RESULT_LIMIT`].
    ///
    /// Duplicate words (after lower-casing) are searched once. Words with no
    /// occurrences are dropped.
    pub fn rank<S: AsRef<str>>(&self, words: &[S]) -> Vec<Match> {
        let distinct: HashSet<String> = words.iter().map(|w| fold(w.as_ref()).collect()).collect();

        let mut matches: Vec<Match> = distinct
            .into_iter()
            .filter_map(|word| {
                let chars: Vec<char> = word.chars().collect();
                let count = self.grid.count(&chars);
                (count > 0).then_some(Match { word, count })
            })
            .collect();

        let found = matches.len();
        matches.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        matches.truncate(RESULT_LIMIT);

        tracing::debug!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            words = words.len(),
            found,
            returned = matches.len(),
            "grid search complete"
        );
        matches
    }
}

impl WordFinder for GridSearchEngine {
    fn find<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        self.rank(words).into_iter().map(|m| m.word).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
