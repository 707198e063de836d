//! Implementation of `tl check`.

use std::process::ExitCode;

use tl_config::{Config, ConfigWarning, discover_config_files, is_global_config};

use crate::cli::context::CommandContext;

/// Exit codes for `tl check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
    /// Configuration has errors and cannot be used.
    pub const ERROR: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and reports issues.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'tl init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("Config files:");
    for path in &config_files {
        if is_global_config(path) {
            println!("  {} (global)", path.display());
        } else {
            println!("  {}", path.display());
        }
    }
    println!();

    let config = match Config::load_from_files(&config_files) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_codes::ERROR;
        }
    };

    println!(
        "Ranking: window {} (T1={}, T2={}, T3={})",
        config.ranking.time_window(),
        config.ranking.weights.t1,
        config.ranking.weights.t2,
        config.ranking.weights.t3
    );
    println!(
        "Keywords: limit {}, {} order, {} extra stop phrases, {} extra domain words",
        config.keywords.limit,
        config.keywords.collation,
        config.keywords.stop_phrases.len(),
        config.keywords.domain_words.len()
    );
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::UnknownWindow { .. } => {
                "Set [ranking] window to one of: all, today, month, semester, year."
            }
            ConfigWarning::WeightsNotIncreasing { .. } => {
                "Give higher tiers larger weights, e.g. T1 = 5, T2 = 10, T3 = 15."
            }
            ConfigWarning::ZeroKeywordLimit => "Set [keywords] limit to at least 1.",
            ConfigWarning::StopPhraseNeverMatches { .. }
            | ConfigWarning::DomainWordNeverMatches { .. } => {
                "Comments are reduced to Chinese characters before matching; keep only Chinese characters in these entries."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
