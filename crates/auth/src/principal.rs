use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signature algorithm a credential was verified under.
///
/// A closed set: the verifier only accepts HMAC-SHA256, and recording the
/// algorithm on the principal keeps that auditable downstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialAlgorithm {
    Hs256,
}

impl CredentialAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialAlgorithm::Hs256 => "HS256",
        }
    }
}

/// Verified identity extracted from a credential.
///
/// Attached to the request context after a successful check and discarded
/// when the request completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub subject: String,
    pub issuer: String,
    pub algorithm: CredentialAlgorithm,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
