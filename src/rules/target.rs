//! Target (query) checks.

use super::TargetRuleFunc;
use crate::models::dashboard::{Dashboard, Panel, Target};
use crate::models::LintResult;
use regex::Regex;
use std::sync::OnceLock;

const RATE_INTERVAL: &str = "$__rate_interval";

pub fn expr_set_rule() -> TargetRuleFunc {
    TargetRuleFunc {
        name: "target-expr-set",
        description: "Checks that each target defines a query expression",
        func: lint_expr_set,
    }
}

pub fn rate_interval_rule() -> TargetRuleFunc {
    TargetRuleFunc {
        name: "target-rate-interval",
        description: "Checks that rate, irate and increase use $__rate_interval as their range",
        func: lint_rate_interval,
    }
}

fn lint_expr_set(d: &Dashboard, p: &Panel, t: &Target) -> LintResult {
    match t.expr.as_deref() {
        Some(e) if !e.trim().is_empty() => LintResult::success(),
        _ => LintResult::error(format!(
            "Dashboard '{}', panel '{}' target '{}' has no expression",
            d.title, p.id, t.ref_id
        )),
    }
}

fn rate_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:rate|irate|increase)\s*\([^\[\)]*\[([^\]]+)\]")
            .expect("rate range regex is valid")
    })
}

fn lint_rate_interval(d: &Dashboard, p: &Panel, t: &Target) -> LintResult {
    let Some(expr) = t.expr.as_deref() else {
        return LintResult::success();
    };
    let bad: Vec<&str> = rate_range_re()
        .captures_iter(expr)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|r| *r != RATE_INTERVAL)
        .collect();
    if bad.is_empty() {
        return LintResult::success();
    }
    LintResult::error(format!(
        "Dashboard '{}', panel '{}' target '{}' uses range(s) [{}]; should use {}",
        d.title,
        p.id,
        t.ref_id,
        bad.join(", "),
        RATE_INTERVAL
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn target(expr: Option<&str>) -> Target {
        Target {
            ref_id: "A".into(),
            expr: expr.map(String::from),
            datasource: None,
        }
    }

    #[test]
    fn test_expr_set() {
        let d = Dashboard::default();
        let p = Panel::default();
        assert_eq!(
            lint_expr_set(&d, &p, &target(None)).severity,
            Severity::Error
        );
        assert_eq!(
            lint_expr_set(&d, &p, &target(Some(" "))).severity,
            Severity::Error
        );
        assert_eq!(
            lint_expr_set(&d, &p, &target(Some("up"))),
            LintResult::success()
        );
    }

    #[test]
    fn test_rate_interval() {
        let d = Dashboard::default();
        let p = Panel::default();
        let ok = target(Some(
            r#"sum(rate(http_requests_total{job="api"}[$__rate_interval]))"#,
        ));
        assert_eq!(lint_rate_interval(&d, &p, &ok), LintResult::success());

        let bad = target(Some(
            "rate(a[5m]) / increase(b[$__rate_interval]) + irate(c[1m])",
        ));
        let res = lint_rate_interval(&d, &p, &bad);
        assert_eq!(res.severity, Severity::Error);
        assert!(res.message.contains("[5m, 1m]"));

        // Not a rate function: `generate` must not match `rate`.
        let other = target(Some("generate(x[5m])"));
        assert_eq!(lint_rate_interval(&d, &p, &other), LintResult::success());
        assert_eq!(
            lint_rate_interval(&d, &p, &target(None)),
            LintResult::success()
        );
    }
}
