//! Error types for document decoding and configuration loading.
//!
//! Rule findings are never errors; they are `LintResult` values.

use std::path::PathBuf;
use thiserror::Error;

/// A dashboard document that could not be decoded into the entity tree.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to parse dashboard '{document}': {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    pub fn document(&self) -> &str {
        match self {
            DocumentError::Parse { document, .. } => document,
        }
    }
}

/// Failures while loading a configuration file or integration manifest.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
