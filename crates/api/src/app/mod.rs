//! HTTP application wiring (axum router + middleware stack).
//!
//! Composition is explicit: configuration is constructed first at
//! bootstrap, the verifier is built from it, and the guard receives the
//! verifier by ownership. Nothing here reaches for ambient state.

use std::sync::Arc;

use axum::{
    extract::Request, middleware::from_fn, middleware::from_fn_with_state, Router, ServiceExt,
};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
};

use snappoll_auth::TokenVerifier;
use snappoll_config::{AppConfig, RunMode};

use crate::middleware::{self, AuthState, PublicRoutes, DEFAULT_VERSION};

pub mod errors;
pub mod routes;

/// Issuer stamped into and required from every credential.
pub const TOKEN_ISSUER: &str = "custom";

/// Build the full HTTP router (public entrypoint used by `main.rs` and
/// the black-box tests).
pub fn build_app(config: &AppConfig) -> Router {
    let verifier = Arc::new(TokenVerifier::new(
        config.secret().jwt.as_bytes(),
        TOKEN_ISSUER,
    ));

    // Exemption table is keyed by post-rewrite paths.
    let public_routes = Arc::new(PublicRoutes::new().exempt(format!("/api/{DEFAULT_VERSION}/health")));

    let auth_state = AuthState {
        verifier,
        public_routes,
    };

    Router::new()
        .nest(&format!("/api/{DEFAULT_VERSION}"), routes::router())
        .layer(from_fn_with_state(auth_state, middleware::auth_guard))
        .layer(cors_layer(config.common().run_mode))
        .layer(CompressionLayer::new())
}

/// Serve `router` on `listener` until the process is terminated.
///
/// The default-version rewrite must run before routing, so the router is
/// wrapped here rather than layered inside it.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    let app = from_fn(middleware::rewrite_default_version).layer(router);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await
}

fn cors_layer(run_mode: RunMode) -> CorsLayer {
    match run_mode {
        RunMode::Development => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        // TODO: pin allowed origins once the production hosts are known.
        RunMode::Production => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true),
    }
}
