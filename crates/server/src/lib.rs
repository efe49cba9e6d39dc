//! HTTP service layer: request/response marshaling over the analysis core.
//!
//! All real logic lives in the library crates; this crate only routes,
//! validates the weakly-typed edges (JSON body, query strings), and renders
//! core error kinds as status codes.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use stringstat_store::MemoryStore;
use tokio::sync::RwLock;

mod error;
mod handlers;

pub use error::ApiError;

/// Shared service state. The store is injected here rather than living in a
/// process-wide global, so tests can spin up isolated instances.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<MemoryStore>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builds the service router. The natural-language route is registered as a
/// static segment, so it wins over the `/strings/:value` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .with_state(state)
}
