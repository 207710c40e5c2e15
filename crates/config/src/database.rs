use serde::{Deserialize, Serialize};

use crate::{common::RunMode, ConfigError, Section};

const SECTION: Section = Section::Database;

/// The `database` section: connection parameters.
///
/// This crate only materializes the values; pooling and query semantics
/// belong to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub(crate) fn load<F>(lookup: &F, run_mode: RunMode) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    section: SECTION,
                    key: "DB_PORT",
                    reason: e.to_string(),
                })?,
            None => 5432,
        };

        let username = lookup("DB_USERNAME").unwrap_or_else(|| "postgres".to_string());

        let password = match lookup("DB_PASSWORD") {
            Some(pw) => pw,
            None if run_mode.is_production() => {
                return Err(ConfigError::MissingValue {
                    section: SECTION,
                    key: "DB_PASSWORD",
                });
            }
            None => String::new(),
        };

        let name = lookup("DB_NAME").unwrap_or_else(|| "snappoll".to_string());

        Ok(Self {
            host,
            port,
            username,
            password,
            name,
        })
    }
}
