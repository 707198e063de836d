//! tl: Tier List
//!
//! Ranks teachers by the tiers students give them and mines the comments attached to those
//! ratings for the phrases that characterize each teacher.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, telemetry,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(cli.verbose) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    // init and check must work even when an existing config file is broken
    let ctx = match cli.command {
        Commands::Init(_) | Commands::Check => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
