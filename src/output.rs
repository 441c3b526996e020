//! Output rendering for the `lint` and `rules` commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form lists every
//! result with its context plus parse errors and a top-level summary.

use crate::error::DocumentError;
use crate::results::{ResultSet, RuleInfo};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Print lint results in the requested format.
pub fn print_lint(res: &ResultSet, output: &str, errors: &[DocumentError]) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_lint_json(res, errors)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", error_prefix(false), e),
        },
        _ => {
            let color = use_colors(output);
            for e in errors {
                eprintln!("{} {}", error_prefix(color), e);
            }
            print!("{}", res.report_by_rule(color));
            let s = res.summary();
            let summary = format!(
                "— Summary — errors={} warnings={} excluded={} passed={} parse_errors={}",
                s.errors,
                s.warnings,
                s.excluded,
                s.successes,
                errors.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the rule catalogue as a markdown list.
pub fn print_rules(rules: &[RuleInfo], output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(rules) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", error_prefix(false), e),
        },
        _ => print!("{}", compose_rules_markdown(rules)),
    }
}

pub fn compose_rules_markdown(rules: &[RuleInfo]) -> String {
    rules
        .iter()
        .map(|r| format!("* `{}` - {}\n", r.name, r.description))
        .collect()
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &ResultSet, errors: &[DocumentError]) -> JsonVal {
    let parse_errors: Vec<_> = errors
        .iter()
        .map(|e| json!({"document": e.document(), "message": e.to_string()}))
        .collect();
    json!({
        "results": res.results(),
        "parse_errors": parse_errors,
        "summary": res.summary(),
        "maximum_severity": res.maximum_severity(),
    })
}
