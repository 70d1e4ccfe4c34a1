//! Field-map configuration files
//!
//! A configuration is a JSON document holding the two lookup maps and an
//! optional literal policy:
//!
//! ```json
//! {
//!   "names": {"foo": "table1.foo", "baz": "other"},
//!   "empty_values": {"foo": 0, "baz": ""},
//!   "literal_policy": {"max_length": 24}
//! }
//! ```
//!
//! `name_map` and `empty_value_map` are accepted as alternative keys.

use cohort_expr_compile::{Compiler, FieldMaps, LiteralPolicy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid field maps in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub fields: FieldMaps,
    #[serde(default)]
    pub literal_policy: LiteralPolicy,
}

impl Config {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a compiler owning these maps
    pub fn into_compiler(self) -> Compiler {
        Compiler::new(self.fields).with_policy(self.literal_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_expr_compile::DEFAULT_MAX_LITERAL_LENGTH;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_policy_defaults_when_absent() {
        let config = Config::from_json(r#"{"names": {"foo": "t.foo"}}"#).unwrap();
        assert_eq!(config.literal_policy.max_length, DEFAULT_MAX_LITERAL_LENGTH);
        assert_eq!(config.fields, FieldMaps::new().with_column("foo", "t.foo"));
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_json(
            r#"{
                "name_map": {"foo": "table1.foo", "baz": "other"},
                "empty_value_map": {"foo": 0, "baz": ""},
                "literal_policy": {"max_length": 4}
            }"#,
        )
        .unwrap();
        let compiler = config.into_compiler();
        assert_eq!(compiler.compile("foo").unwrap(), "( table1.foo != 0 )");
        assert!(compiler.compile("baz = 'hello'").unwrap_err().is_literal_format());
    }

    #[test]
    fn test_rejects_malformed_empty_value() {
        assert!(Config::from_json(r#"{"empty_values": {"foo": [1]}}"#).is_err());
    }
}
