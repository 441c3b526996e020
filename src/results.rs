//! Result aggregation: configuration overrides, maximum severity, and the
//! grouped-by-rule report.

use crate::config::Configuration;
use crate::models::{ResultContext, Severity};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Name and description of a registered rule.
pub struct RuleInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub excluded: usize,
    pub successes: usize,
}

#[derive(Debug, Clone, Default)]
/// Ordered observations of one lint run.
pub struct ResultSet {
    results: Vec<ResultContext>,
    rules: Vec<RuleInfo>,
    config: Configuration,
}

impl ResultSet {
    /// `rules` is the registration-order catalogue used for grouping.
    pub fn new(rules: Vec<RuleInfo>) -> Self {
        ResultSet {
            results: Vec::new(),
            rules,
            config: Configuration::default(),
        }
    }

    pub fn add_result(&mut self, rc: ResultContext) {
        self.results.push(rc);
    }

    pub fn results(&self) -> &[ResultContext] {
        &self.results
    }

    pub fn rules(&self) -> &[RuleInfo] {
        &self.rules
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Apply exclusions and severity overrides, returning a new set.
    ///
    /// Excluded rules become `Exclude`. Overrides only rewrite failing
    /// results; passing results and unconfigured rules are left as they were.
    pub fn configure(&self, config: &Configuration) -> ResultSet {
        let results = self
            .results
            .iter()
            .map(|rc| {
                let mut out = rc.clone();
                if config.is_excluded(&rc.rule) {
                    out.result.severity = Severity::Exclude;
                } else if let Some(sev) = config.severity_override(&rc.rule) {
                    if rc.result.severity.is_failure() {
                        out.result.severity = sev;
                    }
                }
                out
            })
            .collect();
        ResultSet {
            results,
            rules: self.rules.clone(),
            config: config.clone(),
        }
    }

    pub fn maximum_severity(&self) -> Severity {
        self.results
            .iter()
            .map(|rc| rc.result.severity)
            .max()
            .unwrap_or(Severity::Success)
    }

    /// Results grouped by rule in registration order. Rules that produced
    /// nothing are omitted.
    pub fn by_rule(&self) -> Vec<(&RuleInfo, Vec<&ResultContext>)> {
        let groups: Vec<(&RuleInfo, Vec<&ResultContext>)> = self
            .rules
            .iter()
            .map(|info| {
                let items: Vec<&ResultContext> = self
                    .results
                    .iter()
                    .filter(|rc| rc.rule == info.name)
                    .collect();
                (info, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect();
        let orphans = self
            .results
            .iter()
            .filter(|rc| !self.rules.iter().any(|r| r.name == rc.rule))
            .count();
        if orphans > 0 {
            tracing::warn!(count = orphans, "results reference unregistered rules");
        }
        groups
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for rc in &self.results {
            match rc.result.severity {
                Severity::Error => s.errors += 1,
                Severity::Warning => s.warnings += 1,
                Severity::Exclude => s.excluded += 1,
                Severity::Success => s.successes += 1,
            }
        }
        s
    }

    /// Render the grouped report. `Success` and `Exclude` lines are only
    /// included when the configuration is verbose.
    pub fn report_by_rule(&self, color: bool) -> String {
        let mut out = String::new();
        for (info, items) in self.by_rule() {
            let lines: Vec<String> = items
                .iter()
                .filter(|rc| self.config.verbose || rc.result.severity.is_failure())
                .map(|rc| format!("\t[{}] {}", symbol(rc.result.severity, color), line_text(rc)))
                .collect();
            if lines.is_empty() {
                continue;
            }
            let header = format!("{} ({})", info.description, info.name);
            if color {
                out.push_str(&header.bold().to_string());
            } else {
                out.push_str(&header);
            }
            out.push('\n');
            for l in lines {
                out.push_str(&l);
                out.push('\n');
            }
        }
        out
    }
}

fn symbol(sev: Severity, color: bool) -> String {
    let (s, painted) = match sev {
        Severity::Success => ("✔", "✔".green().to_string()),
        Severity::Exclude => ("➖", "➖".blue().to_string()),
        Severity::Warning => ("⚠", "⚠".yellow().to_string()),
        Severity::Error => ("✖", "✖".red().to_string()),
    };
    if color {
        painted
    } else {
        s.to_string()
    }
}

fn line_text(rc: &ResultContext) -> String {
    if !rc.result.message.is_empty() {
        return rc.result.message.clone();
    }
    let mut parts: Vec<String> = Vec::new();
    if let Some(i) = rc.integration.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("Integration '{}'", i));
    }
    if let Some(d) = &rc.dashboard {
        parts.push(format!("Dashboard '{}'", d));
    }
    if let Some(p) = &rc.panel {
        parts.push(format!("panel '{}'", p.id));
    }
    if let Some(t) = &rc.target {
        parts.push(format!("target '{}'", t));
    }
    if parts.is_empty() {
        "OK".to_string()
    } else {
        format!("{}: OK", parts.join(", "))
    }
}
