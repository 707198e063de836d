//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod keywords;
pub mod rank;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Rank(cmd) => rank::run(ctx, &cmd),
        Commands::Keywords(cmd) => keywords::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
