//! Integration metadata checks.

use super::IntegrationRuleFunc;
use crate::models::integration::Integration;
use crate::models::LintResult;

pub fn logo_url_rule() -> IntegrationRuleFunc {
    IntegrationRuleFunc {
        name: "meta-logo-url",
        description: "Checks that the integration declares a logo URL",
        func: |i| match i.logo_url.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => LintResult::success(),
            _ => LintResult::warning(format!("Integration '{}' has no logo URL", i.name)),
        },
    }
}

pub fn supported_platforms_rule() -> IntegrationRuleFunc {
    IntegrationRuleFunc {
        name: "meta-supported-platforms",
        description: "Checks that the integration lists its supported platforms",
        func: lint_supported_platforms,
    }
}

fn lint_supported_platforms(i: &Integration) -> LintResult {
    if i.supported_platforms.iter().any(|p| !p.trim().is_empty()) {
        LintResult::success()
    } else {
        LintResult::warning(format!(
            "Integration '{}' does not list any supported platforms",
            i.name
        ))
    }
}
