use thiserror::Error;

use crate::Section;

/// Configuration load failure.
///
/// Any variant is fatal at startup: the process must not begin accepting
/// requests with a partially populated configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was absent from the environment.
    #[error("missing configuration value {key} (section '{section}')")]
    MissingValue {
        section: Section,
        key: &'static str,
    },

    /// A value was present but could not be parsed.
    #[error("invalid configuration value {key} (section '{section}'): {reason}")]
    InvalidValue {
        section: Section,
        key: &'static str,
        reason: String,
    },
}
