//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dashlint",
    version,
    about = "Lint dashboard definitions",
    long_about = "dashlint — validate dashboard JSON (dashboards, rows, panels, targets) against built-in rules.\n\nConfiguration precedence: --config > .lint next to the first dashboard > defaults.",
    after_help = "Examples:\n  dashlint lint dashboards/node.json\n  dashlint lint 'dashboards/*.json' --strict --output json\n  dashlint lint dash.json --integration integration.yaml\n  dashlint rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current dashlint version.")]
    Version,
    /// Lint dashboards
    #[command(
        about = "Lint dashboards",
        long_about = "Return warnings or errors for dashboards which do not adhere to the rules. Paths may be glob patterns.",
        after_help = "Examples:\n  dashlint lint dash.json --verbose\n  dashlint lint 'dash/*.json' -c lint.yaml --strict"
    )]
    Lint {
        #[arg(required = true, help = "Dashboard JSON files or glob patterns")]
        files: Vec<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Fail upon linting error or warning")]
        strict: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show passing and excluded results")]
        verbose: bool,
        #[arg(short, long, help = "Path to a configuration file (default: .lint beside the first dashboard)")]
        config: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Integration manifest (YAML/TOML); enables integration rules")]
        integration: Option<String>,
    },
    /// Print documentation about each lint rule
    #[command(
        about = "List rules",
        long_about = "Print the name and description of every built-in rule."
    )]
    Rules {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lint_flags() {
        let cli = Cli::try_parse_from([
            "dashlint", "lint", "a.json", "b/*.json", "--strict", "-c", "cfg.yaml", "--output",
            "json",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Lint {
                files,
                strict,
                verbose,
                config,
                output,
                integration,
            } => {
                assert_eq!(files, vec!["a.json", "b/*.json"]);
                assert!(strict);
                assert!(!verbose);
                assert_eq!(config.as_deref(), Some("cfg.yaml"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(integration.is_none());
            }
            _ => panic!("expected lint"),
        }
    }

    #[test]
    fn test_lint_requires_files() {
        assert!(Cli::try_parse_from(["dashlint", "lint"]).is_err());
    }
}
