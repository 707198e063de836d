//! Implementation of `tl rank`.

use std::process::ExitCode;

use tl_core::RankingEngine;

use crate::cli::{
    args::RankCommand,
    context::CommandContext,
    input::{load_ratings, load_teachers},
    output::{print_json, ranking_table},
};

/// Ranks teachers by weighted tier score over the selected window.
pub fn run(ctx: &CommandContext, cmd: &RankCommand) -> ExitCode {
    let settings = &ctx.config.ranking;

    let (teachers, ratings) = match (load_teachers(&cmd.teachers), load_ratings(&cmd.ratings)) {
        (Ok(teachers), Ok(ratings)) => (teachers, ratings),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let window = cmd.window.unwrap_or_else(|| settings.time_window());
    let engine = RankingEngine::new(settings.weights.into());
    let mut ranked = engine.rank(&teachers, &ratings, window);
    if let Some(limit) = cmd.limit {
        ranked.truncate(limit);
    }

    if cmd.output.json {
        return print_json(&ranked);
    }

    if ranked.is_empty() {
        println!("No teachers found.");
        return ExitCode::SUCCESS;
    }
    println!("Ranking ({window}):");
    println!("{}", ranking_table(&ranked));
    ExitCode::SUCCESS
}
