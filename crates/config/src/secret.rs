use serde::{Deserialize, Serialize};

use crate::{common::RunMode, ConfigError, Section};

const SECTION: Section = Section::Secret;

const DEV_JWT_SECRET: &str = "dev-secret";

/// The `secret` section: signing material.
///
/// The single `jwt` value both signs and verifies credentials within one
/// process instance; issuance and verification deliberately share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    /// Symmetric HMAC-SHA256 signing secret.
    pub jwt: String,
}

impl SecretConfig {
    pub(crate) fn load<F>(lookup: &F, run_mode: RunMode) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt = match lookup("JWT_SECRET") {
            Some(s) if !s.is_empty() => s,
            _ if run_mode.is_production() => {
                return Err(ConfigError::MissingValue {
                    section: SECTION,
                    key: "JWT_SECRET",
                });
            }
            _ => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                DEV_JWT_SECRET.to_string()
            }
        };

        Ok(Self { jwt })
    }
}
