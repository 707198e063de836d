//! CLI support for the `tl` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod input;
pub mod output;
pub mod telemetry;

pub use context::CommandContext;
