//! Configuration file parsing.
//!
//! Parses individual `.tl.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{Collation, ConfigError};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Ranking section.
    pub ranking: Option<RawRankingSettings>,
    /// Keyword section.
    pub keywords: Option<RawKeywordSettings>,
}

/// Raw per-tier weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWeights {
    /// Weight of a `T1` rating.
    #[serde(rename = "T1")]
    pub t1: Option<u32>,
    /// Weight of a `T2` rating.
    #[serde(rename = "T2")]
    pub t2: Option<u32>,
    /// Weight of a `T3` rating.
    #[serde(rename = "T3")]
    pub t3: Option<u32>,
}

/// Raw ranking settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRankingSettings {
    /// Default time window name.
    pub window: Option<String>,
    /// Popularity points per tier.
    pub weights: Option<RawWeights>,
}

/// Raw keyword settings.
///
/// Phrase lists accept either a single string or an array of strings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawKeywordSettings {
    /// Default number of keywords to return.
    pub limit: Option<usize>,
    /// Phrases added to the built-in stop list.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stop_phrases: Option<Vec<String>>,
    /// Words added to the built-in domain vocabulary.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub domain_words: Option<Vec<String>>,
    /// Whether to merge the ISO Chinese stopword list.
    pub iso_stopwords: Option<bool>,
    /// Tie-break order, `pinyin` or `codepoint`.
    pub collation: Option<Collation>,
    /// Word-importance weight per tier.
    pub weights: Option<RawWeights>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
