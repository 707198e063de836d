//! Configuration system for tl.
//!
//! tl uses TOML configuration files named `.tl.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.tl.toml` files found,
//! then loading `~/.tl.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawKeywordSettings, RawRankingSettings, RawWeights, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{TemplateScope, template};
use tl_core::{TierWeights, TimeWindow};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for tl.
///
/// This represents the fully resolved configuration after merging all discovered `.tl.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Ranking settings.
    pub ranking: RankingSettings,
    /// Keyword extraction settings.
    pub keywords: KeywordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.tl.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.tl.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.tl.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.tl.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            ranking: &self.ranking,
            keywords: &self.keywords,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Per-tier weights as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightSettings {
    /// Weight of a `T1` rating.
    #[serde(rename = "T1")]
    pub t1: u32,
    /// Weight of a `T2` rating.
    #[serde(rename = "T2")]
    pub t2: u32,
    /// Weight of a `T3` rating.
    #[serde(rename = "T3")]
    pub t3: u32,
}

impl WeightSettings {
    /// Returns true if the weights strictly increase from `T1` to `T3`.
    pub fn is_increasing(&self) -> bool {
        self.t1 < self.t2 && self.t2 < self.t3
    }
}

impl From<TierWeights> for WeightSettings {
    fn from(w: TierWeights) -> Self {
        Self {
            t1: w.t1,
            t2: w.t2,
            t3: w.t3,
        }
    }
}

impl From<WeightSettings> for TierWeights {
    fn from(w: WeightSettings) -> Self {
        Self {
            t1: w.t1,
            t2: w.t2,
            t3: w.t3,
        }
    }
}

/// Settings for `tl rank`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Default time window name.
    pub window: String,
    /// Popularity points per tier.
    pub weights: WeightSettings,
}

impl RankingSettings {
    /// Resolves the configured window, treating unknown names as `all`.
    pub fn time_window(&self) -> TimeWindow {
        TimeWindow::from_name(&self.window)
    }
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            window: TimeWindow::All.to_string(),
            weights: TierWeights::RANKING.into(),
        }
    }
}

/// Tie-break order for keywords with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Pinyin order from the `zh` collation tables.
    #[default]
    Pinyin,
    /// Unicode code point order.
    Codepoint,
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pinyin => "pinyin",
            Self::Codepoint => "codepoint",
        })
    }
}

/// Settings for `tl keywords`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Default number of keywords to return.
    pub limit: usize,
    /// Phrases added to the built-in stop list.
    pub stop_phrases: Vec<String>,
    /// Words added to the built-in domain vocabulary.
    pub domain_words: Vec<String>,
    /// Whether to merge the ISO Chinese stopword list into the stop list.
    pub iso_stopwords: bool,
    /// Order of keywords that tie on score, document frequency and length.
    pub collation: Collation,
    /// Word-importance weight per tier.
    pub weights: WeightSettings,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            limit: 5,
            stop_phrases: Vec::new(),
            domain_words: Vec::new(),
            iso_stopwords: false,
            collation: Collation::Pinyin,
            weights: TierWeights::KEYWORD.into(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Ranking settings.
    ranking: &'a RankingSettings,
    /// Keyword settings.
    keywords: &'a KeywordSettings,
}
