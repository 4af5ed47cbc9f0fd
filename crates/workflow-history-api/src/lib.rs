//! Workflow history gateway: JSON routes over the retrieval services.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router without middleware layers.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1/namespaces",
            routes::events::router().merge(routes::counts::router()),
        )
        .with_state(state)
}
