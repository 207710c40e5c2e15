use thiserror::Error;

/// Why a credential was rejected.
///
/// Every variant maps to the same wire-level outcome (unauthorized), but
/// the distinction is kept so callers and tests can observe the exact
/// rejection reason. None of these are fatal; a rejected request simply
/// never reaches a handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable `Authorization: Bearer <token>` header on the request.
    #[error("missing bearer credential")]
    MissingCredential,

    /// The token is not parseable as a JWT at all.
    #[error("malformed credential")]
    Malformed,

    /// Signature does not verify under the configured secret, or the token
    /// was signed with an algorithm other than HMAC-SHA256.
    #[error("invalid credential signature")]
    InvalidSignature,

    /// The `iss` claim does not match the expected issuer.
    #[error("invalid credential issuer")]
    InvalidIssuer,

    /// The `exp` claim is in the past.
    #[error("expired credential")]
    ExpiredCredential,
}

impl AuthError {
    /// Stable machine-readable code, used in error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::Malformed => "malformed_credential",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::InvalidIssuer => "invalid_issuer",
            AuthError::ExpiredCredential => "expired_credential",
        }
    }
}
