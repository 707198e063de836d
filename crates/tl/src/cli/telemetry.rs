//! Diagnostic logging to stderr.

use std::{env, error, io};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TL_LOG";

/// Filter used when neither `-v` nor `TL_LOG` is given.
const DEFAULT_FILTER: &str = "warn";

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter '{value}': {source}")]
    EnvFilter {
        /// The rejected directives.
        value: String,
        /// Underlying parse error.
        source: ParseError,
    },

    /// A global subscriber could not be installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(Box<dyn error::Error + Send + Sync>),
}

/// Returns the filter directives for the given verbosity.
///
/// `-v` and `-vv` take precedence over `TL_LOG`.
fn directives(verbose: u8) -> String {
    match verbose {
        0 => env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global log subscriber writing to stderr.
pub fn init(verbose: u8) -> Result<(), TelemetryError> {
    let value = directives(verbose);
    let filter = EnvFilter::try_new(&value).map_err(|source| TelemetryError::EnvFilter {
        value: value.clone(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
