//! Implementation of `tl keywords`.

use std::process::ExitCode;

use chrono::Local;
use tl_core::filter_by_window;
use tl_keywords::KeywordExtractor;

use crate::cli::{
    args::KeywordsCommand,
    context::CommandContext,
    input::load_ratings,
    output::{keyword_table, print_json},
};

/// Mines keywords from the comments of the selected ratings.
pub fn run(ctx: &CommandContext, cmd: &KeywordsCommand) -> ExitCode {
    let settings = &ctx.config.keywords;

    let ratings = match load_ratings(&cmd.ratings) {
        Ok(ratings) => ratings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let window = cmd.window.unwrap_or_default();
    let in_window = filter_by_window(&ratings, window, &Local::now());
    let selected = in_window
        .iter()
        .filter(|r| cmd.teacher.as_ref().is_none_or(|id| &r.teacher_id == id));

    let limit = cmd.limit.unwrap_or(settings.limit);
    let extractor = KeywordExtractor::from_settings(settings);

    if cmd.scores {
        let keywords = extractor.extract_scored(selected, limit);
        if cmd.output.json {
            return print_json(&keywords);
        }
        if keywords.is_empty() {
            println!("No keywords found.");
        } else {
            println!("{}", keyword_table(&keywords));
        }
        return ExitCode::SUCCESS;
    }

    let keywords = extractor.extract(selected, limit);
    if cmd.output.json {
        return print_json(&keywords);
    }
    if keywords.is_empty() {
        println!("No keywords found.");
    }
    for keyword in &keywords {
        println!("{keyword}");
    }
    ExitCode::SUCCESS
}
