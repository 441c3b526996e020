//! Integration bundle: metadata plus the raw dashboard documents to lint.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
/// A named raw dashboard source, decoded lazily during lint.
pub struct Document {
    pub name: String,
    pub source: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Top-level unit of a lint run.
pub struct Integration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub supported_platforms: Vec<String>,
    #[serde(skip)]
    pub dashboards: Vec<Document>,
}

impl Integration {
    pub fn new(name: impl Into<String>) -> Self {
        Integration {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_dashboard(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.dashboards.push(Document {
            name: name.into(),
            source: source.into(),
        });
    }

    /// Load integration metadata from a YAML or TOML manifest.
    ///
    /// Dashboards are not part of the manifest; callers attach them.
    pub fn load_manifest(path: &Path) -> Result<Integration, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
        if is_toml {
            toml::from_str(&s).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest_yaml_and_toml() {
        let dir = tempdir().unwrap();
        let y = dir.path().join("integration.yaml");
        fs::write(
            &y,
            "name: node\nlogo_url: https://x/logo.png\nsupported_platforms: [linux]\n",
        )
        .unwrap();
        let i = Integration::load_manifest(&y).unwrap();
        assert_eq!(i.name, "node");
        assert_eq!(i.supported_platforms, vec!["linux"]);
        assert!(i.dashboards.is_empty());

        let t = dir.path().join("integration.toml");
        fs::write(&t, "name = \"mysql\"\n").unwrap();
        let i = Integration::load_manifest(&t).unwrap();
        assert_eq!(i.name, "mysql");
        assert!(i.logo_url.is_none());
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let dir = tempdir().unwrap();
        let err = Integration::load_manifest(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
