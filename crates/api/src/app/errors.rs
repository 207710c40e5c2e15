use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use snappoll_auth::AuthError;

/// Map a rejected credential to the wire.
///
/// Status is uniformly 401; the body's `error` code carries the distinct
/// rejection reason.
pub fn unauthorized(err: AuthError) -> axum::response::Response {
    json_error(StatusCode::UNAUTHORIZED, err.code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
