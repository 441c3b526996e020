//! Rule set and tree traversal.
//!
//! Traversal order is fixed: for each integration, integration rules; then
//! for each dashboard document, dashboard rules; then for each panel
//! (top-level panels, then row panels, each followed depth-first by its
//! sub-panels) the panel rules, and for each of that panel's targets the
//! target rules. Every invocation is recorded, passing ones included.
//!
//! A document that fails to decode is reported as a `DocumentError` and
//! skipped; the remaining documents are still linted.

use crate::error::DocumentError;
use crate::models::dashboard::{Dashboard, Panel};
use crate::models::integration::Integration;
use crate::models::{PanelRef, ResultContext};
use crate::results::{ResultSet, RuleInfo};
use crate::rules::{
    builtin_dashboard_rules, builtin_integration_rules, builtin_panel_rules,
    builtin_target_rules, DashboardRule, IntegrationRule, PanelRule, Rule, TargetRule,
};
use tracing::{debug, info, warn};

/// Registered rules per level plus the integrations to lint.
#[derive(Default)]
pub struct RuleSet {
    integration_rules: Vec<Box<dyn IntegrationRule>>,
    dashboard_rules: Vec<Box<dyn DashboardRule>>,
    panel_rules: Vec<Box<dyn PanelRule>>,
    target_rules: Vec<Box<dyn TargetRule>>,
    integrations: Vec<Integration>,
}

impl RuleSet {
    /// Built-in dashboard, panel, and target rules.
    pub fn new() -> Self {
        RuleSet {
            dashboard_rules: builtin_dashboard_rules(),
            panel_rules: builtin_panel_rules(),
            target_rules: builtin_target_rules(),
            ..Default::default()
        }
    }

    /// No rules registered.
    pub fn empty() -> Self {
        RuleSet::default()
    }

    /// Also register the built-in integration metadata rules.
    pub fn with_integration_rules(mut self) -> Self {
        self.integration_rules.extend(builtin_integration_rules());
        self
    }

    pub fn add_integration_rule(&mut self, rule: Box<dyn IntegrationRule>) {
        self.integration_rules.push(rule);
    }

    pub fn add_dashboard_rule(&mut self, rule: Box<dyn DashboardRule>) {
        self.dashboard_rules.push(rule);
    }

    pub fn add_panel_rule(&mut self, rule: Box<dyn PanelRule>) {
        self.panel_rules.push(rule);
    }

    pub fn add_target_rule(&mut self, rule: Box<dyn TargetRule>) {
        self.target_rules.push(rule);
    }

    pub fn add_integration(&mut self, integration: Integration) {
        self.integrations.push(integration);
    }

    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }

    /// Every registered rule: integration, dashboard, panel, then target
    /// level, registration order within a level.
    pub fn rules(&self) -> Vec<RuleInfo> {
        fn rule_info<R: Rule + ?Sized>(r: &R) -> RuleInfo {
            RuleInfo {
                name: r.name().to_string(),
                description: r.description().to_string(),
            }
        }
        let mut out = Vec::new();
        out.extend(self.integration_rules.iter().map(|r| rule_info(&**r)));
        out.extend(self.dashboard_rules.iter().map(|r| rule_info(&**r)));
        out.extend(self.panel_rules.iter().map(|r| rule_info(&**r)));
        out.extend(self.target_rules.iter().map(|r| rule_info(&**r)));
        out
    }

    /// Run every rule over every integration.
    pub fn lint(&self) -> (ResultSet, Vec<DocumentError>) {
        let mut errs: Vec<DocumentError> = Vec::new();
        let mut res_set = ResultSet::new(self.rules());
        for i in &self.integrations {
            debug!(integration = %i.name, dashboards = i.dashboards.len(), "linting integration");
            for ir in &self.integration_rules {
                res_set.add_result(ResultContext {
                    result: ir.lint_integration(i),
                    rule: ir.name().to_string(),
                    integration: Some(i.name.clone()),
                    dashboard: None,
                    panel: None,
                    target: None,
                });
            }
            for doc in &i.dashboards {
                let dash = match Dashboard::from_json(&doc.source) {
                    Ok(d) => d,
                    Err(source) => {
                        warn!(document = %doc.name, error = %source, "skipping undecodable dashboard");
                        errs.push(DocumentError::Parse {
                            document: doc.name.clone(),
                            source,
                        });
                        continue;
                    }
                };
                debug!(document = %doc.name, title = %dash.title, "linting dashboard");
                self.lint_dashboard(i, &dash, &mut res_set);
            }
        }
        info!(
            results = res_set.len(),
            errors = errs.len(),
            "lint pass complete"
        );
        (res_set, errs)
    }

    fn lint_dashboard(&self, i: &Integration, dash: &Dashboard, res_set: &mut ResultSet) {
        let ctx = |result, rule: &str, panel: Option<&Panel>, target: Option<String>| {
            ResultContext {
                result,
                rule: rule.to_string(),
                integration: Some(i.name.clone()),
                dashboard: Some(dash.title.clone()),
                panel: panel.map(|p| PanelRef {
                    id: p.id,
                    title: p.title.clone(),
                }),
                target,
            }
        };
        for dr in &self.dashboard_rules {
            res_set.add_result(ctx(dr.lint_dashboard(i, dash), dr.name(), None, None));
        }
        for p in dash.panels() {
            for pr in &self.panel_rules {
                res_set.add_result(ctx(pr.lint_panel(i, dash, p), pr.name(), Some(p), None));
            }
            for t in &p.targets {
                for tr in &self.target_rules {
                    res_set.add_result(ctx(
                        tr.lint_target(i, dash, p, t),
                        tr.name(),
                        Some(p),
                        Some(t.ref_id.clone()),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::models::{LintResult, Severity};
    use crate::rules::{PanelRuleFunc, TargetRuleFunc};
    use serde_json::json;

    fn integration(docs: &[(&str, String)]) -> Integration {
        let mut i = Integration::new("test");
        for (name, src) in docs {
            i.add_dashboard(*name, src.clone());
        }
        i
    }

    fn counting_panel_rule() -> Box<dyn PanelRule> {
        Box::new(PanelRuleFunc {
            name: "visit",
            description: "records every panel",
            func: |_, p| LintResult::warning(p.id.to_string()),
        })
    }

    #[test]
    fn test_visits_every_panel_once_in_order() {
        let src = json!({
            "title": "t",
            "panels": [{"id": 1, "panels": [{"id": 2, "panels": [{"id": 3}]}]}],
            "rows": [{"panels": [{"id": 4}]}, {"panels": [{"id": 5, "panels": [{"id": 6}]}]}]
        })
        .to_string();
        let mut rs = RuleSet::empty();
        rs.add_panel_rule(counting_panel_rule());
        rs.add_integration(integration(&[("d.json", src)]));
        let (res, errs) = rs.lint();
        assert!(errs.is_empty());
        let seen: Vec<&str> = res.results().iter().map(|r| r.result.message.as_str()).collect();
        assert_eq!(seen, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_level_order_and_success_kept() {
        let src = json!({
            "title": "Demo",
            "panels": [
                {"id": 1, "targets": [{"refId": "A", "expr": "up"}, {"refId": "B", "expr": "rate(x[5m])"}]},
                {"id": 2}
            ]
        })
        .to_string();
        let mut rs = RuleSet::new().with_integration_rules();
        rs.add_integration(integration(&[("d.json", src)]));
        let (res, errs) = rs.lint();
        assert!(errs.is_empty());
        let order: Vec<(&str, Option<i64>, Option<&str>)> = res
            .results()
            .iter()
            .map(|r| {
                (
                    r.rule.as_str(),
                    r.panel.as_ref().map(|p| p.id),
                    r.target.as_deref(),
                )
            })
            .collect();
        assert_eq!(
            order,
            vec![
                ("meta-logo-url", None, None),
                ("meta-supported-platforms", None, None),
                ("dashboard-title", None, None),
                ("panel-unique-id", Some(1), None),
                ("target-expr-set", Some(1), Some("A")),
                ("target-rate-interval", Some(1), Some("A")),
                ("target-expr-set", Some(1), Some("B")),
                ("target-rate-interval", Some(1), Some("B")),
                ("panel-unique-id", Some(2), None),
            ]
        );
        assert_eq!(
            res.results()
                .iter()
                .filter(|r| r.result.severity == Severity::Success)
                .count(),
            6
        );
        assert_eq!(res.maximum_severity(), Severity::Error);
    }

    #[test]
    fn test_parse_failure_does_not_block_other_documents() {
        let good = json!({"title": "Good", "panels": [{"id": 1}]}).to_string();
        let mut rs = RuleSet::new();
        rs.add_integration(integration(&[
            ("bad.json", "{not json".to_string()),
            ("noid.json", r#"{"panels": [{"title": "x"}]}"#.to_string()),
            ("good.json", good),
        ]));
        let (res, errs) = rs.lint();
        let failed: Vec<&str> = errs.iter().map(|e| e.document()).collect();
        assert_eq!(failed, vec!["bad.json", "noid.json"]);
        assert!(res
            .results()
            .iter()
            .all(|r| r.dashboard.as_deref() == Some("Good")));
        assert_eq!(res.len(), 2);
    }

    #[test]
    fn test_demo_dashboard_end_to_end() {
        let src = json!({"title": "Demo", "panels": [{"id": 1}, {"id": 2}, {"id": 2}]}).to_string();
        let mut rs = RuleSet::new();
        rs.add_integration(integration(&[("demo.json", src)]));
        let (res, _) = rs.lint();
        let uniq: Vec<&ResultContext> = res
            .results()
            .iter()
            .filter(|r| r.rule == "panel-unique-id")
            .collect();
        assert_eq!(uniq.len(), 3);
        assert_eq!(uniq[0].result, LintResult::success());
        for r in &uniq[1..] {
            assert_eq!(r.result.severity, Severity::Error);
            assert!(r.result.message.contains("with 2 duplicate id(s)"));
            assert!(r.result.message.contains("Candidate ids: []"));
        }

        let downgraded = res.configure(&Configuration::default().with_severity("panel-unique-id", Severity::Warning));
        assert_eq!(downgraded.maximum_severity(), Severity::Warning);
    }

    #[test]
    fn test_target_rule_receives_each_target() {
        let src = json!({
            "title": "t",
            "rows": [{"panels": [{"id": 9, "targets": [{"refId": "A"}, {"refId": "B"}]}]}]
        })
        .to_string();
        let mut rs = RuleSet::empty();
        rs.add_target_rule(Box::new(TargetRuleFunc {
            name: "ref",
            description: "echo ref id",
            func: |_, p, t| LintResult::warning(format!("{}/{}", p.id, t.ref_id)),
        }));
        rs.add_integration(integration(&[("d.json", src)]));
        let (res, _) = rs.lint();
        let seen: Vec<&str> = res.results().iter().map(|r| r.result.message.as_str()).collect();
        assert_eq!(seen, vec!["9/A", "9/B"]);
    }

    #[test]
    fn test_rules_listing_order() {
        let rs = RuleSet::new().with_integration_rules();
        let rules = rs.rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "meta-logo-url",
                "meta-supported-platforms",
                "dashboard-title",
                "panel-unique-id",
                "target-expr-set",
                "target-rate-interval",
            ]
        );
        assert!(RuleSet::empty().rules().is_empty());
    }
}
