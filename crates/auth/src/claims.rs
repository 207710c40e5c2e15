use serde::{Deserialize, Serialize};

/// Wire-level JWT claims.
///
/// This is the registered-claims subset the verifier cares about; extra
/// claims in a token are ignored. Timestamps are seconds since the Unix
/// epoch, per RFC 7519.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer.
    pub iss: String,

    /// Subject / principal identifier.
    pub sub: String,

    /// Issued-at, epoch seconds.
    pub iat: i64,

    /// Expiry, epoch seconds.
    pub exp: i64,
}
