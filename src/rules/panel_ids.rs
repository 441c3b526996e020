//! `panel-unique-id`: every panel id must occur once per dashboard.
//!
//! The id frequency map covers top-level panels, row panels, and all nested
//! sub-panels. It is rebuilt on each evaluation so the rule stays a pure
//! function of `(dashboard, panel)`.
//!
//! On a duplicate, unused ids are suggested from `1..max`. The upper bound
//! excludes `max` itself; existing reports depend on that range so it is
//! kept as is.

use super::PanelRuleFunc;
use crate::models::dashboard::{Dashboard, Panel};
use crate::models::LintResult;
use std::collections::HashMap;

pub fn panel_unique_id_rule() -> PanelRuleFunc {
    PanelRuleFunc {
        name: "panel-unique-id",
        description: "Checks that each panel has a unique ID",
        func: lint_unique_id,
    }
}

/// Count every panel id reachable from the dashboard root.
pub fn panel_id_counts(d: &Dashboard) -> HashMap<i64, usize> {
    let mut ids = HashMap::new();
    for p in &d.panels {
        count_ids(p, &mut ids);
    }
    for row in &d.rows {
        for p in &row.panels {
            count_ids(p, &mut ids);
        }
    }
    ids
}

fn count_ids(p: &Panel, ids: &mut HashMap<i64, usize>) {
    *ids.entry(p.id).or_insert(0) += 1;
    for sub in &p.panels {
        count_ids(sub, ids);
    }
}

/// Unused ids in `1..max` (exclusive), ascending, and the observed `max`.
///
/// `max` starts at -1, so a map of only ids below -1 reports -1.
pub fn candidate_ids(ids: &HashMap<i64, usize>) -> (Vec<i64>, i64) {
    let max = ids.keys().copied().fold(-1, i64::max);
    let candidates = (1..max).filter(|i| !ids.contains_key(i)).collect();
    (candidates, max)
}

fn lint_unique_id(d: &Dashboard, p: &Panel) -> LintResult {
    let ids = panel_id_counts(d);
    let count = match ids.get(&p.id) {
        Some(c) => *c,
        None => {
            return LintResult::error(format!(
                "Dashboard '{}', panel with id '{}' was not found among the dashboard's panels; the panel tree is inconsistent",
                d.title, p.id
            ))
        }
    };
    if count <= 1 {
        return LintResult::success();
    }
    let (candidates, max) = candidate_ids(&ids);
    let listed = candidates
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    LintResult::error(format!(
        "Dashboard '{}', panel with id '{}' has panels with {} duplicate id(s). Candidate ids: [{}] (max: {})",
        d.title, p.id, count, listed, max
    ))
}
