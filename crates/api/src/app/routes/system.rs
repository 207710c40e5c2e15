use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use snappoll_auth::Principal;

/// Liveness probe; exempt from the guard.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo the authenticated principal (the guard attached it).
pub async fn whoami(Extension(principal): Extension<Principal>) -> impl IntoResponse {
    Json(serde_json::json!({
        "subject": principal.subject,
        "issuer": principal.issuer,
        "algorithm": principal.algorithm.as_str(),
        "issued_at": principal.issued_at.to_rfc3339(),
        "expires_at": principal.expires_at.to_rfc3339(),
    }))
}
