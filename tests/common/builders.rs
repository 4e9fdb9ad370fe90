//! Test builders — ergonomic constructors for engines and HTTP requests.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use axum::body::Body;
use axum::http::{header, Method, Request};
use wordgrid_core::GridSearchEngine;

/// Build an engine over `rows`, panicking on a malformed grid.
pub fn engine(rows: &[&str]) -> GridSearchEngine {
    GridSearchEngine::new(rows).expect("fixture grid must be rectangular")
}

/// Collect string slices into owned strings.
pub fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// FindRequestBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for `POST /api/wordfinder/find` requests.
///
/// # Example
///
/// ```rust
/// let req = FindRequestBuilder::new()
///     .matrix(&["chill", "coldw", "windd"])
///     .words(&["cold"])
///     .build();
/// ```
#[derive(Default)]
pub struct FindRequestBuilder {
    body: serde_json::Map<String, serde_json::Value>,
}

impl FindRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matrix(mut self, rows: &[&str]) -> Self {
        self.body.insert("matrix".into(), serde_json::json!(rows));
        self
    }

    pub fn words(mut self, words: &[&str]) -> Self {
        self.body.insert("wordStream".into(), serde_json::json!(words));
        self
    }

    /// Set a field to an arbitrary JSON value (e.g. `null`).
    pub fn raw(mut self, key: &str, value: serde_json::Value) -> Self {
        self.body.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Request<Body> {
        json_post(serde_json::Value::Object(self.body).to_string())
    }
}

/// A JSON `POST /api/wordfinder/find` with an arbitrary body.
pub fn json_post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/wordfinder/find")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request must build")
}
