use crate::AuthError;

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// `header` is the raw header value if the request carried one. Anything
/// other than a non-empty token behind the `Bearer ` prefix is treated as
/// a missing credential.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}
