//! Resolve CLI path arguments into dashboard documents.
//!
//! Arguments containing glob metacharacters are expanded with `glob`;
//! anything else is taken literally. Order follows the arguments, and glob
//! matches are sorted by path.

use crate::models::integration::Integration;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("bad glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("no files match '{0}'")]
    NoMatch(String),
    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

pub fn expand_paths(args: &[String]) -> Result<Vec<PathBuf>, InputError> {
    let mut out: Vec<PathBuf> = Vec::new();
    for arg in args {
        if !is_glob(arg) {
            out.push(PathBuf::from(arg));
            continue;
        }
        let entries = glob::glob(arg).map_err(|source| InputError::Pattern {
            pattern: arg.clone(),
            source,
        })?;
        let mut matched: Vec<PathBuf> = entries.filter_map(Result::ok).collect();
        if matched.is_empty() {
            return Err(InputError::NoMatch(arg.clone()));
        }
        matched.sort();
        out.extend(matched);
    }
    Ok(out)
}

/// Read each path and attach it to `integration` as a dashboard document.
pub fn load_documents(integration: &mut Integration, paths: &[PathBuf]) -> Result<(), InputError> {
    for path in paths {
        let source = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;
        integration.add_dashboard(path.to_string_lossy(), source);
    }
    Ok(())
}
