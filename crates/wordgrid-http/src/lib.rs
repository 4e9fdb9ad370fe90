//! wordgrid-http — HTTP front end for the wordgrid engine.
//!
//! The engine assumes a well-formed grid; this crate is where that is
//! enforced. A request flows through:
//!
//! ```text
//! JSON body ──► validate ──► FinderService ──► GridSearchEngine ──► JSON body
//!                  │               │
//!                  └── 400         └── 500
//! ```
//!
//! # Routes
//!
//! | Method | Path                    | Handler                          |
//! |--------|-------------------------|----------------------------------|
//! | POST   | `/api/wordfinder/find`  | [`handlers::find_words`]         |
//! | GET    | `/health`               | [`handlers::health`]             |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod service;
pub mod validate;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use wordgrid_core::config::Limits;

pub use dto::{ErrorBody, FindRequest, FindResponse, NO_MATCHES};
pub use error::ApiError;
pub use service::{FinderService, GridFinderService, ServiceError};
pub use validate::{validate, RequestError, ValidRequest};

/// Shared handler state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn FinderService>,
    pub limits: Limits,
}

impl AppState {
    /// State backed by the real engine.
    pub fn new(limits: Limits) -> Self {
        Self::with_service(Arc::new(GridFinderService), limits)
    }

    pub fn with_service(service: Arc<dyn FinderService>, limits: Limits) -> Self {
        Self { service, limits }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/wordfinder/find", post(handlers::find_words))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bind `addr` and serve [`router`] until Ctrl+C.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        max_rows = state.limits.max_rows,
        max_cols = state.limits.max_cols,
        "HTTP server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
