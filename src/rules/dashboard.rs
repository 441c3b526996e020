//! Dashboard-level checks.

use super::DashboardRuleFunc;
use crate::models::LintResult;

pub fn title_rule() -> DashboardRuleFunc {
    DashboardRuleFunc {
        name: "dashboard-title",
        description: "Checks that the dashboard has a title",
        func: |d| {
            if d.title.trim().is_empty() {
                LintResult::error("Dashboard has an empty title")
            } else {
                LintResult::success()
            }
        },
    }
}
