//! dashlint CLI binary entry point.
//! Loads dashboards and configuration, runs the rule set, prints results.

use clap::Parser;
use dashlint::cli::{Cli, Commands};
use dashlint::config::{self, Configuration};
use dashlint::input;
use dashlint::lint::RuleSet;
use dashlint::models::integration::Integration;
use dashlint::models::Severity;
use dashlint::output;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", output::error_prefix(output::use_colors("human")), msg);
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Rules { output: mode } => {
            init_tracing(false);
            let rules = RuleSet::new().with_integration_rules();
            output::print_rules(&rules.rules(), mode.as_deref().unwrap_or("human"));
        }
        Commands::Lint {
            files,
            strict,
            verbose,
            config: config_path,
            output: output_mode,
            integration,
        } => {
            init_tracing(verbose);
            let output_mode = output_mode.unwrap_or_else(|| "human".to_string());

            let paths = input::expand_paths(&files).unwrap_or_else(|e| fail(e));
            let (mut integ, with_meta) = match integration.as_deref() {
                Some(p) => (
                    Integration::load_manifest(Path::new(p)).unwrap_or_else(|e| fail(e)),
                    true,
                ),
                None => (Integration::new(""), false),
            };
            input::load_documents(&mut integ, &paths).unwrap_or_else(|e| fail(e));

            let cfg_path =
                config::resolve_config_path(config_path.as_deref(), paths.first().map(|p| p.as_path()));
            let mut cfg = Configuration::load(&cfg_path).unwrap_or_else(|e| fail(e));
            cfg.verbose = verbose;
            info!(config = %cfg_path.display(), rules = cfg.rules.len(), "configuration loaded");

            let mut rules = RuleSet::new();
            if with_meta {
                rules = rules.with_integration_rules();
            }
            rules.add_integration(integ);
            let (results, errors) = rules.lint();
            let results = results.configure(&cfg);
            output::print_lint(&results, &output_mode, &errors);

            if !errors.is_empty() {
                std::process::exit(1);
            }
            if strict && results.maximum_severity() >= Severity::Warning {
                if output_mode != "json" {
                    eprintln!(
                        "{} there were linting errors, please see previous output",
                        output::error_prefix(output::use_colors(&output_mode))
                    );
                }
                std::process::exit(1);
            }
        }
    }
}
