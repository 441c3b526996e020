//! Rule taxonomy.
//!
//! A rule is scoped to exactly one level of the entity tree and only ever
//! receives the data for that level (plus its ancestors). Rules are pure:
//! they take `&self`, keep no state between calls, and return exactly one
//! `LintResult` per invocation.
//!
//! Built-in rules are declared as function-backed adapters
//! (`PanelRuleFunc` and friends) and collected by the `builtin_*` lists.

pub mod dashboard;
pub mod meta;
pub mod panel_ids;
pub mod target;

use crate::models::dashboard::{Dashboard, Panel, Target};
use crate::models::integration::Integration;
use crate::models::LintResult;

/// Name and description shared by every rule.
pub trait Rule {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

pub trait IntegrationRule: Rule {
    fn lint_integration(&self, i: &Integration) -> LintResult;
}

pub trait DashboardRule: Rule {
    fn lint_dashboard(&self, i: &Integration, d: &Dashboard) -> LintResult;
}

pub trait PanelRule: Rule {
    fn lint_panel(&self, i: &Integration, d: &Dashboard, p: &Panel) -> LintResult;
}

pub trait TargetRule: Rule {
    fn lint_target(&self, i: &Integration, d: &Dashboard, p: &Panel, t: &Target) -> LintResult;
}

macro_rules! rule_func {
    ($(#[$meta:meta])* $name:ident, $fn_ty:ty) => {
        $(#[$meta])*
        pub struct $name {
            pub name: &'static str,
            pub description: &'static str,
            pub func: $fn_ty,
        }

        impl Rule for $name {
            fn name(&self) -> &str {
                self.name
            }

            fn description(&self) -> &str {
                self.description
            }
        }
    };
}

rule_func!(
    /// Integration rule backed by a plain function.
    IntegrationRuleFunc,
    fn(&Integration) -> LintResult
);
rule_func!(
    /// Dashboard rule backed by a plain function. The integration is not
    /// passed through; dashboard checks only look at the dashboard.
    DashboardRuleFunc,
    fn(&Dashboard) -> LintResult
);
rule_func!(
    /// Panel rule backed by a plain function.
    PanelRuleFunc,
    fn(&Dashboard, &Panel) -> LintResult
);
rule_func!(
    /// Target rule backed by a plain function.
    TargetRuleFunc,
    fn(&Dashboard, &Panel, &Target) -> LintResult
);

impl IntegrationRule for IntegrationRuleFunc {
    fn lint_integration(&self, i: &Integration) -> LintResult {
        (self.func)(i)
    }
}

impl DashboardRule for DashboardRuleFunc {
    fn lint_dashboard(&self, _i: &Integration, d: &Dashboard) -> LintResult {
        (self.func)(d)
    }
}

impl PanelRule for PanelRuleFunc {
    fn lint_panel(&self, _i: &Integration, d: &Dashboard, p: &Panel) -> LintResult {
        (self.func)(d, p)
    }
}

impl TargetRule for TargetRuleFunc {
    fn lint_target(&self, _i: &Integration, d: &Dashboard, p: &Panel, t: &Target) -> LintResult {
        (self.func)(d, p, t)
    }
}

pub fn builtin_integration_rules() -> Vec<Box<dyn IntegrationRule>> {
    vec![
        Box::new(meta::logo_url_rule()),
        Box::new(meta::supported_platforms_rule()),
    ]
}

pub fn builtin_dashboard_rules() -> Vec<Box<dyn DashboardRule>> {
    vec![Box::new(dashboard::title_rule())]
}

pub fn builtin_panel_rules() -> Vec<Box<dyn PanelRule>> {
    vec![Box::new(panel_ids::panel_unique_id_rule())]
}

pub fn builtin_target_rules() -> Vec<Box<dyn TargetRule>> {
    vec![
        Box::new(target::expr_set_rule()),
        Box::new(target::rate_interval_rule()),
    ]
}
