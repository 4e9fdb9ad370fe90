//! Route handlers. Both are thin: validation and the search itself live in
//! the `validate` and `service` modules.

use axum::extract::State;
use axum::Json;

use crate::dto::{FindRequest, FindResponse};
use crate::error::ApiError;
use crate::validate::validate;
use crate::AppState;

/// `POST /api/wordfinder/find`
pub async fn find_words(
    State(state): State<AppState>,
    Json(request): Json<FindRequest>,
) -> Result<Json<FindResponse>, ApiError> {
    let valid = validate(&request, &state.limits)?;
    let words = state.service.find_words(&valid)?;

    tracing::debug!(
        rows = valid.matrix.len(),
        words = valid.words.len(),
        found = words.len(),
        "find request served"
    );
    Ok(Json(FindResponse::from_words(words)))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
