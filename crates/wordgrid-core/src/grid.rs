//! Grid — the immutable, lower-cased letter matrix a search runs against.
//!
//! Both orientations are materialised at construction: `rows` read left to
//! right, `columns` read top to bottom. A line scan is then a plain slice
//! comparison over `char`s, which keeps matching ordinal.

use thiserror::Error;

/// Malformed grid input. Raised by [`Grid::new`] only; searching a grid never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGrid {
    /// No rows, or rows with no characters in them.
    #[error("grid must contain at least one non-empty row")]
    Empty,
    /// A row whose length differs from the first row's.
    #[error("grid row {row} has length {found}, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular matrix of lower-case characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    columns: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from row strings, top to bottom.
    ///
    /// Rows are folded with [`fold`], which keeps every row's length, so the
    /// rectangle check agrees with a plain `chars().count()` on the input.
    pub fn new<I, S>(rows: I) -> Result<Self, InvalidGrid>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| fold(row.as_ref()).collect())
            .collect();

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(InvalidGrid::Empty),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(InvalidGrid::Jagged {
                row,
                expected: width,
                found,
            });
        }

        let columns = (0..width)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect();

        Ok(Self { rows, columns })
    }

    /// Number of rows (grid height).
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (grid width).
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Row `index` read left to right.
    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Column `index` read top to bottom.
    pub fn column(&self, index: usize) -> Option<&[char]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Every scan line: all rows first, then all columns.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().chain(self.columns.iter()).map(Vec::as_slice)
    }

    /// Total overlapping occurrences of `word` across every row and column.
    ///
    /// `word` must already be folded. A single-character word is seen
    /// once by its row scan and once by its column scan, so each matching cell
    /// counts twice.
    pub fn count(&self, word: &[char]) -> usize {
        self.lines().map(|line| occurrences(line, word)).sum()
    }
}

/// Lower-case one character without changing the length of the text.
///
/// A character whose lower case is more than one character (`'İ'`) is kept as
/// is. Folding is context-free: `'Σ'` always becomes `'σ'`, never final `'ς'`.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// [`fold_char`] applied to every character of `text`.
pub fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().map(fold_char)
}

/// Overlapping occurrences of `word` in `line`; the next match may start one
/// position after the previous one.
pub fn occurrences(line: &[char], word: &[char]) -> usize {
    if word.is_empty() || word.len() > line.len() {
        return 0;
    }
    line.windows(word.len()).filter(|window| *window == word).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
