//! Core types shared by the engine and its callers.

/// Maximum number of words a search returns.
pub const RESULT_LIMIT: usize = 10;

/// A word found in the grid together with its total occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Lower-cased word as searched.
    pub word: String,
    /// Occurrences across every row scan and column scan. Always non-zero.
    pub count: usize,
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.word, self.count)
    }
}
