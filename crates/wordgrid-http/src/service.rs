//! Finder service — turns a validated request into a ranked word list.
//!
//! [`GridFinderService`] builds a fresh [`GridSearchEngine`] for every call
//! and drops it afterwards; nothing survives between requests. Handlers hold
//! the service behind `Arc<dyn FinderService>` so tests can substitute their
//! own.

use thiserror::Error;
use wordgrid_core::{GridSearchEngine, WordFinder};

use crate::validate::ValidRequest;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure inside the service. The display text is deliberately generic; the
/// cause is kept as the error source for logging only.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("An error occurred while processing the word search.")]
    Processing(#[source] BoxError),
}

impl ServiceError {
    pub fn processing(cause: impl Into<BoxError>) -> Self {
        ServiceError::Processing(cause.into())
    }
}

/// Searches the words of a validated request in its matrix.
pub trait FinderService: Send + Sync {
    fn find_words(&self, request: &ValidRequest<'_>) -> Result<Vec<String>, ServiceError>;
}

/// The production [`FinderService`], backed by [`GridSearchEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridFinderService;

impl FinderService for GridFinderService {
    fn find_words(&self, request: &ValidRequest<'_>) -> Result<Vec<String>, ServiceError> {
        let engine = GridSearchEngine::new(request.matrix).map_err(ServiceError::processing)?;
        Ok(engine.find(request.words))
    }
}
