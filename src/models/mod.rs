//! Shared data models: severities, rule outcomes, and the records that tie
//! an outcome back to the entity it was produced against.

pub mod dashboard;
pub mod integration;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Ordered diagnostic severity.
///
/// `Exclude` is what configuration turns an excluded finding into. It sits
/// above `Success` and below every failing severity.
pub enum Severity {
    #[default]
    Success,
    Exclude,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Exclude => "exclude",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Outcome of a single rule evaluation.
pub struct LintResult {
    pub severity: Severity,
    pub message: String,
}

impl LintResult {
    /// A fresh passing result with no message.
    pub fn success() -> Self {
        LintResult {
            severity: Severity::Success,
            message: String::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        LintResult {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        LintResult {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Identifies the panel a result was produced against.
pub struct PanelRef {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One evaluation record: the outcome plus the rule and entities involved.
///
/// Entities are identified by name or id only; the tree itself is not
/// retained once traversal ends.
pub struct ResultContext {
    pub result: LintResult,
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}
