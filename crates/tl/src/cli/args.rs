//! Clap argument definitions for the `tl` CLI.

use std::{convert::Infallible, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use tl_core::{Id, TimeWindow};

/// Parse a time window from a string.
fn parse_window(s: &str) -> Result<TimeWindow, String> {
    s.parse()
}

/// Parse a teacher id from a string.
fn parse_id(s: &str) -> Result<Id, Infallible> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tl")]
#[command(about = "Tier List - teacher rankings and comment keywords")]
#[command(version)]
pub struct Cli {
    /// Verbosity level (-v for debug logs, -vv for trace logs)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tl rank`.
#[derive(Args, Debug, Clone)]
pub struct RankCommand {
    /// JSON file holding an array of ratings
    #[arg(short = 'r', long)]
    pub ratings: PathBuf,

    /// JSON file holding an array of teachers
    #[arg(short = 't', long)]
    pub teachers: PathBuf,

    /// Time window: all, today, month, semester, year [default: from config, else all]
    #[arg(short = 'w', long, value_parser = parse_window)]
    pub window: Option<TimeWindow>,

    /// Show only the top N teachers
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `tl keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    /// JSON file holding an array of ratings
    #[arg(short = 'r', long)]
    pub ratings: PathBuf,

    /// Only use ratings of this teacher
    #[arg(long, value_parser = parse_id)]
    pub teacher: Option<Id>,

    /// Time window: all, today, month, semester, year [default: all]
    #[arg(short = 'w', long, value_parser = parse_window)]
    pub window: Option<TimeWindow>,

    /// Maximum keywords to return [default: from config, else 5]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show score, document frequency and weight for each keyword
    #[arg(long)]
    pub scores: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `tl init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.tl.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `tl` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank teachers by weighted tier score
    #[command(after_help = "\
WINDOWS:
  all        Every rating
  today      Since local midnight
  month      Since the first of the current month
  semester   Since Sep 1 (Sep-Jan) or Feb 1 (Feb-Aug)
  year       Since Jan 1

EXAMPLES:
  tl rank -r ratings.json -t teachers.json
  tl rank -r ratings.json -t teachers.json -w semester -n 10
  tl rank -r ratings.json -t teachers.json --json")]
    Rank(RankCommand),

    /// Mine the most characteristic phrases from rating comments
    Keywords(KeywordsCommand),

    /// Initialize tl configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}
