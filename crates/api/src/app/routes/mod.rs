use axum::{routing::get, Router};

pub mod system;

/// Router mounted under the versioned API prefix.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/whoami", get(system::whoami))
}
