//! dashlint core library.
//!
//! Lints dashboard definitions (dashboards, rows, panels, query targets)
//! with pluggable rules and reports severity-classified results.
//!
//! High-level modules:
//! - `models`: Entity tree, severities, results, and result contexts.
//! - `rules`: Rule traits per level and the built-in rules.
//! - `lint`: `RuleSet` registration and deterministic traversal.
//! - `results`: `ResultSet` configuration, maximum severity, reporting.
//! - `config`: Rule exclusions and severity overrides from `.lint` files.
//! - `input`: CLI path expansion and document loading.
//! - `output`: Human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Error types.
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod lint;
pub mod models;
pub mod output;
pub mod results;
pub mod rules;
