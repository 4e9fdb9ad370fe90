//! Request validation — everything the engine assumes but does not check.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. matrix and word stream present and non-empty
//! 2. grid within [`Limits`]
//! 3. rows of equal length
//! 4. alphabetic characters only
//!
//! Lengths are counted in `char`s.

use thiserror::Error;
use wordgrid_core::config::Limits;

use crate::dto::FindRequest;

/// A request that passed every rule. Borrows from the original body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRequest<'a> {
    pub matrix: &'a [String],
    pub words: &'a [String],
}

/// Why a request was rejected. The display text is the caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Matrix and word stream cannot be null.")]
    Missing,
    #[error("Matrix size must not exceed {max_rows}x{max_cols}.")]
    TooLarge { max_rows: usize, max_cols: usize },
    #[error("Matrix rows must have the same length.")]
    UnequalRows,
    #[error("Matrix must contain only alphabetic characters.")]
    NonAlphabetic,
}

pub fn validate<'a>(
    request: &'a FindRequest,
    limits: &Limits,
) -> Result<ValidRequest<'a>, RequestError> {
    let (matrix, words) = match (&request.matrix, &request.word_stream) {
        (Some(matrix), Some(words)) if !words.is_empty() => (matrix.as_slice(), words.as_slice()),
        _ => return Err(RequestError::Missing),
    };
    // A matrix of blank rows has no cells to search.
    if matrix.iter().all(String::is_empty) {
        return Err(RequestError::Missing);
    }

    let widths: Vec<usize> = matrix.iter().map(|row| row.chars().count()).collect();

    if matrix.len() > limits.max_rows || widths.iter().any(|&w| w > limits.max_cols) {
        return Err(RequestError::TooLarge {
            max_rows: limits.max_rows,
            max_cols: limits.max_cols,
        });
    }

    if widths.iter().any(|&w| w != widths[0]) {
        return Err(RequestError::UnequalRows);
    }

    if !matrix.iter().flat_map(|row| row.chars()).all(char::is_alphabetic) {
        return Err(RequestError::NonAlphabetic);
    }

    Ok(ValidRequest { matrix, words })
}
