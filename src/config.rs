//! Lint configuration: per-rule exclusions and severity overrides.
//!
//! The file lives next to the dashboards as `.lint` (YAML) unless a path is
//! passed explicitly; a `.toml` extension selects TOML. A missing file
//! yields the default configuration.
//!
//! ```yaml
//! exclusions:
//!   panel-unique-id:
//!     reason: legacy dashboard
//! warnings:
//!   target-rate-interval:
//! rules:
//!   dashboard-title:
//!     severity: error
//! ```
//!
//! Precedence per rule: `rules.<name>` > `exclusions` / `warnings`.

use crate::error::ConfigError;
use crate::models::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = ".lint";

#[derive(Debug, Default, Deserialize, Clone)]
/// Optional note attached to an `exclusions` / `warnings` entry.
pub struct RuleEntry {
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Explicit per-rule settings under `rules.<name>`.
pub struct RuleOverride {
    pub severity: Option<Severity>,
    pub exclude: Option<bool>,
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Raw configuration file shape.
pub struct ConfigFile {
    #[serde(default)]
    pub exclusions: HashMap<String, Option<RuleEntry>>,
    #[serde(default)]
    pub warnings: HashMap<String, Option<RuleEntry>>,
    #[serde(default)]
    pub rules: HashMap<String, RuleOverride>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Resolved settings for one rule.
pub struct RuleConfig {
    pub severity: Option<Severity>,
    pub exclude: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Default, Clone)]
/// Rule name -> settings, plus report verbosity. Read-only during a run.
pub struct Configuration {
    pub rules: HashMap<String, RuleConfig>,
    pub verbose: bool,
}

impl Configuration {
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.rule(name).map(|r| r.exclude).unwrap_or(false)
    }

    pub fn severity_override(&self, name: &str) -> Option<Severity> {
        self.rule(name).and_then(|r| r.severity)
    }

    pub fn exclude(mut self, name: &str) -> Self {
        self.rules.entry(name.to_string()).or_default().exclude = true;
        self
    }

    pub fn with_severity(mut self, name: &str, severity: Severity) -> Self {
        self.rules.entry(name.to_string()).or_default().severity = Some(severity);
        self
    }

    /// Load from `path`; a missing file is not an error.
    pub fn load(path: &Path) -> Result<Configuration, ConfigError> {
        if !path.exists() {
            return Ok(Configuration::default());
        }
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
            toml::from_str(&s).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        } else if s.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };
        Ok(Configuration::from_file(file))
    }

    pub fn from_file(file: ConfigFile) -> Configuration {
        let mut rules: HashMap<String, RuleConfig> = HashMap::new();
        for (name, entry) in file.warnings {
            let rc = rules.entry(name).or_default();
            rc.severity = Some(Severity::Warning);
            rc.reason = entry.and_then(|e| e.reason);
        }
        for (name, entry) in file.exclusions {
            let rc = rules.entry(name).or_default();
            rc.exclude = true;
            if let Some(reason) = entry.and_then(|e| e.reason) {
                rc.reason = Some(reason);
            }
        }
        for (name, ov) in file.rules {
            let rc = rules.entry(name).or_default();
            if let Some(sev) = ov.severity {
                rc.severity = Some(sev);
            }
            if let Some(ex) = ov.exclude {
                rc.exclude = ex;
            }
            if ov.reason.is_some() {
                rc.reason = ov.reason;
            }
        }
        Configuration {
            rules,
            verbose: false,
        }
    }
}

/// Config path for a run: explicit path, else `.lint` beside the first
/// dashboard, else `.lint` in the current directory.
pub fn resolve_config_path(cli_config: Option<&str>, first_dashboard: Option<&Path>) -> PathBuf {
    if let Some(p) = cli_config {
        return PathBuf::from(p);
    }
    first_dashboard
        .and_then(|p| p.parent())
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
