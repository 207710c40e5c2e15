use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use thiserror::Error;

use crate::Claims;

#[derive(Debug, Error)]
pub enum SignError {
    #[error("failed to encode credential: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Issues bearer credentials.
///
/// Signing uses the same symmetric secret the verifier checks against;
/// within one process the two are always constructed from the same
/// `secret.jwt` configuration value, so an issued credential is verifiable
/// by the same process by construction.
pub struct TokenSigner {
    key: EncodingKey,
    issuer: String,
}

impl TokenSigner {
    pub fn new(secret: &[u8], issuer: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
            issuer: issuer.to_string(),
        }
    }

    /// Mint a credential for `subject`, valid for `ttl` from now.
    pub fn sign(&self, subject: &str, ttl: Duration) -> Result<String, SignError> {
        let now = Utc::now();
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.key)?)
    }
}
