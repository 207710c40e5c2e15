//! `snappoll-config` — process-wide, read-only configuration.
//!
//! Configuration is assembled once at bootstrap from named sections
//! (`common`, `database`, `secret`) and passed by reference into every
//! component that needs it. There is no ambient global; ownership is
//! explicit.

pub mod common;
pub mod database;
pub mod error;
pub mod secret;

pub use common::{CommonConfig, RunMode};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use secret::SecretConfig;

use std::fmt;

/// The closed set of configuration section names.
///
/// Lookups are keyed by this enum, so asking for an unregistered section
/// is unrepresentable at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Common,
    Database,
    Secret,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Common => "common",
            Section::Database => "database",
            Section::Secret => "secret",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of one configuration section.
#[derive(Debug, Copy, Clone)]
pub enum SectionView<'a> {
    Common(&'a CommonConfig),
    Database(&'a DatabaseConfig),
    Secret(&'a SecretConfig),
}

/// Fully materialized process configuration.
///
/// Constructed exactly once during bootstrap and immutable afterwards.
/// Re-initialization is not supported; components hold a shared reference
/// for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    common: CommonConfig,
    database: DatabaseConfig,
    secret: SecretConfig,
}

impl AppConfig {
    /// Load all sections from the process environment.
    ///
    /// Fatal on failure: callers must not start accepting requests if this
    /// returns an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load all sections through an explicit key lookup.
    ///
    /// `from_env` delegates here; tests inject their own lookup instead of
    /// mutating process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let common = CommonConfig::load(&lookup)?;
        let database = DatabaseConfig::load(&lookup, common.run_mode)?;
        let secret = SecretConfig::load(&lookup, common.run_mode)?;

        Ok(Self {
            common,
            database,
            secret,
        })
    }

    /// Look up a section by name.
    pub fn get(&self, section: Section) -> SectionView<'_> {
        match section {
            Section::Common => SectionView::Common(&self.common),
            Section::Database => SectionView::Database(&self.database),
            Section::Secret => SectionView::Secret(&self.secret),
        }
    }

    pub fn common(&self) -> &CommonConfig {
        &self.common
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn secret(&self) -> &SecretConfig {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn development_defaults_fill_every_section() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(cfg.common().run_mode, RunMode::Development);
        assert!(cfg.common().port > 0);
        assert!(!cfg.common().version.is_empty());
        assert!(!cfg.database().host.is_empty());
        assert!(!cfg.secret().jwt.is_empty());
    }

    #[test]
    fn production_requires_explicit_jwt_secret() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("RUN_MODE", "production"),
            ("DB_PASSWORD", "pw"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingValue {
                section: Section::Secret,
                key: "JWT_SECRET",
            }
        );
    }

    #[test]
    fn production_requires_database_password() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("RUN_MODE", "production"),
            ("JWT_SECRET", "s3cr3t"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingValue {
                section: Section::Database,
                key: "DB_PASSWORD",
            }
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();

        match err {
            ConfigError::InvalidValue { section, key, .. } => {
                assert_eq!(section, Section::Common);
                assert_eq!(key, "PORT");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn section_lookup_returns_the_matching_view() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", "9999")])).unwrap();

        match cfg.get(Section::Common) {
            SectionView::Common(c) => assert_eq!(c.port, 9999),
            other => panic!("expected common view, got {other:?}"),
        }
        assert!(matches!(cfg.get(Section::Database), SectionView::Database(_)));
        assert!(matches!(cfg.get(Section::Secret), SectionView::Secret(_)));
    }
}
