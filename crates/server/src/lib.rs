//! HTTP surface for the projects API.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use store::ProjectStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared handler state: the one store for the process, constructed at
/// startup and injected here rather than living as a module-level static.
#[derive(Clone)]
pub struct AppState {
    store: Arc<ProjectStore>,
}

impl AppState {
    pub fn new(store: Arc<ProjectStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }
}

/// Assemble the application router around the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::projects::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
