use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Section};

const SECTION: Section = Section::Common;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_VERSION: &str = "1.0.0";

/// How the process is being run.
///
/// Development relaxes secret requirements and opens CORS; Production
/// requires explicit secrets and enables credentialed CORS.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Development,
    Production,
}

impl RunMode {
    pub fn is_production(&self) -> bool {
        matches!(self, RunMode::Production)
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RunMode::Development),
            "production" | "prod" => Ok(RunMode::Production),
            other => Err(format!("unknown run mode '{other}'")),
        }
    }
}

/// The `common` section: process-level HTTP settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    /// TCP port the HTTP listener binds.
    pub port: u16,
    /// Published API version string (surfaced in docs and startup logs).
    pub version: String,
    pub run_mode: RunMode,
}

impl CommonConfig {
    pub(crate) fn load<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_mode = match lookup("RUN_MODE") {
            Some(raw) => raw
                .parse::<RunMode>()
                .map_err(|reason| ConfigError::InvalidValue {
                    section: SECTION,
                    key: "RUN_MODE",
                    reason,
                })?,
            None => RunMode::default(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    section: SECTION,
                    key: "PORT",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let version = lookup("VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Ok(Self {
            port,
            version,
            run_mode,
        })
    }
}
