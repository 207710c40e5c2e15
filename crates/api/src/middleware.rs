//! Request-admission guard and pre-routing URI rewrites.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};

use snappoll_auth::{extract_bearer, TokenVerifier};

use crate::app::errors;

/// Default API version segment applied when a request omits one.
pub const DEFAULT_VERSION: &str = "v1";

/// Routes exempt from the authentication guard.
///
/// Populated where the router is built; the guard consults it by exact
/// request path before any credential check. An exempt route is allowed
/// unconditionally, credential or not.
#[derive(Debug, Default)]
pub struct PublicRoutes {
    paths: HashSet<String>,
}

impl PublicRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` (full path, post version-rewrite) as exempt.
    pub fn exempt(mut self, path: impl Into<String>) -> Self {
        self.paths.insert(path.into());
        self
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Shared state for the guard: the verifier plus the exemption table.
///
/// Both are built once at bootstrap and immutable afterwards; requests
/// only read from them.
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<TokenVerifier>,
    pub public_routes: Arc<PublicRoutes>,
}

/// Global request gate.
///
/// Every request passes through here exactly once: exempt routes are
/// allowed outright, everything else must present a verifiable bearer
/// credential. On success the decoded `Principal` is attached to the
/// request extensions for handlers; on failure the request is rejected
/// before any handler runs.
pub async fn auth_guard(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    if state.public_routes.is_public(req.uri().path()) {
        return next.run(req).await;
    }

    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let principal = match extract_bearer(header).and_then(|token| state.verifier.verify(token)) {
        Ok(principal) => principal,
        Err(err) => return errors::unauthorized(err),
    };

    req.extensions_mut().insert(principal);

    next.run(req).await
}

/// Rewrite `/api/<rest>` to `/api/v1/<rest>` when the version segment is
/// omitted.
///
/// Runs before routing (the router never sees unversioned paths), so the
/// guard's exemption table only needs versioned entries.
pub async fn rewrite_default_version(mut req: Request, next: Next) -> Response {
    if let Some(rest) = req.uri().path().strip_prefix("/api/") {
        let first = rest.split('/').next().unwrap_or("");
        if !is_version_segment(first) {
            let rewritten = match req.uri().query() {
                Some(q) => format!("/api/{DEFAULT_VERSION}/{rest}?{q}"),
                None => format!("/api/{DEFAULT_VERSION}/{rest}"),
            };
            if let Ok(uri) = rewritten.parse::<Uri>() {
                *req.uri_mut() = uri;
            }
        }
    }

    next.run(req).await
}

fn is_version_segment(segment: &str) -> bool {
    segment.len() >= 2
        && segment.starts_with('v')
        && segment[1..].chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_segments_are_recognized() {
        assert!(is_version_segment("v1"));
        assert!(is_version_segment("v12"));
        assert!(!is_version_segment("v"));
        assert!(!is_version_segment("health"));
        assert!(!is_version_segment("version"));
    }

    #[test]
    fn public_routes_match_by_exact_path() {
        let routes = PublicRoutes::new().exempt("/api/v1/health");

        assert!(routes.is_public("/api/v1/health"));
        assert!(!routes.is_public("/api/v1/whoami"));
        assert!(!routes.is_public("/api/v1/health/extra"));
    }
}
