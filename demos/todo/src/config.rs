//! Configuration for the `todos` binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Default `tracing` filter when neither `RUST_LOG` nor `TODOS_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "todos=info,statecraft_runtime=info";

/// Which implementation of the list to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Two stores driven by reducers, with filtering
    #[default]
    Reducer,
    /// A single component owning its list and draft
    Local,
}

/// A `TODOS_VARIANT` value that names no variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant `{0}` (expected `reducer` or `local`)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reducer" => Ok(Self::Reducer),
            "local" => Ok(Self::Local),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Implementation to run (`TODOS_VARIANT`)
    pub variant: Variant,
    /// Fallback `tracing` filter when `RUST_LOG` is unset (`TODOS_LOG`)
    pub log_filter: String,
    /// Start from the three startup items instead of an empty list (`TODOS_SEED`)
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] if `TODOS_VARIANT` is set to something
    /// other than `reducer` or `local`.
    pub fn from_env() -> Result<Self, UnknownVariant> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// Unset keys fall back to [`Config::default`]. An unparsable
    /// `TODOS_SEED` also falls back.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] for an unknown `TODOS_VARIANT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UnknownVariant>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            variant: lookup("TODOS_VARIANT")
                .map(|s| s.parse::<Variant>())
                .transpose()?
                .unwrap_or(defaults.variant),
            log_filter: lookup("TODOS_LOG").unwrap_or(defaults.log_filter),
            seed: lookup("TODOS_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.variant, Variant::Reducer);
        assert!(config.seed);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            ("TODOS_VARIANT", "Local"),
            ("TODOS_LOG", "todos=debug"),
            ("TODOS_SEED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.variant, Variant::Local);
        assert_eq!(config.log_filter, "todos=debug");
        assert!(!config.seed);
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let error = Config::from_lookup(lookup(&[("TODOS_VARIANT", "redux")])).unwrap_err();
        assert_eq!(error, UnknownVariant("redux".into()));
    }

    #[test]
    fn bad_seed_flag_falls_back() {
        let config = Config::from_lookup(lookup(&[("TODOS_SEED", "maybe")])).unwrap();
        assert!(config.seed);
    }
}
