//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues. None of these
//! stop tl from running; they point at settings that probably do not do what was intended.

use std::fmt;

use tl_core::{TimeWindow, script::is_ideographic};

use crate::{Config, WeightSettings};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The ranking window is not a known window name and will behave as `all`.
    UnknownWindow {
        /// The configured name.
        window: String,
    },
    /// Tier weights do not strictly increase from `T1` to `T3`.
    WeightsNotIncreasing {
        /// Section holding the weights (`ranking` or `keywords`).
        section: &'static str,
        /// The configured weights.
        weights: WeightSettings,
    },
    /// The keyword limit is zero, so extraction always returns nothing.
    ZeroKeywordLimit,
    /// A stop phrase has characters other than ideographs and can never match normalized
    /// comment text.
    StopPhraseNeverMatches {
        /// The configured phrase.
        phrase: String,
    },
    /// A domain word has characters other than ideographs and can never match normalized
    /// comment text.
    DomainWordNeverMatches {
        /// The configured word.
        word: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWindow { window } => {
                write!(f, "unknown ranking window '{window}', using 'all'")
            }
            Self::WeightsNotIncreasing { section, weights } => write!(
                f,
                "[{section}.weights] do not increase from T1 to T3 (T1={}, T2={}, T3={})",
                weights.t1, weights.t2, weights.t3
            ),
            Self::ZeroKeywordLimit => write!(f, "keyword limit is 0, no keywords will be shown"),
            Self::StopPhraseNeverMatches { phrase } => {
                write!(f, "stop phrase '{phrase}' is not purely Chinese and never matches")
            }
            Self::DomainWordNeverMatches { word } => {
                write!(f, "domain word '{word}' is not purely Chinese and never matches")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Window names that are not recognized
/// - Tier weights that do not increase with the tier
/// - A keyword limit of zero
/// - Stop phrases and domain words with characters that normalized text never contains
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.ranking.window.parse::<TimeWindow>().is_err() {
        warnings.push(ConfigWarning::UnknownWindow {
            window: config.ranking.window.clone(),
        });
    }

    for (section, weights) in [
        ("ranking", config.ranking.weights),
        ("keywords", config.keywords.weights),
    ] {
        if !weights.is_increasing() {
            warnings.push(ConfigWarning::WeightsNotIncreasing { section, weights });
        }
    }

    if config.keywords.limit == 0 {
        warnings.push(ConfigWarning::ZeroKeywordLimit);
    }

    for phrase in &config.keywords.stop_phrases {
        if !is_ideographic(phrase) {
            warnings.push(ConfigWarning::StopPhraseNeverMatches {
                phrase: phrase.clone(),
            });
        }
    }
    for word in &config.keywords.domain_words {
        if !is_ideographic(word) {
            warnings.push(ConfigWarning::DomainWordNeverMatches { word: word.clone() });
        }
    }

    warnings
}
