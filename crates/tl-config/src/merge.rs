//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules.

use std::{collections::HashSet, path::PathBuf};

use crate::{
    Config, KeywordSettings, RankingSettings, WeightSettings,
    parse::{RawConfig, RawKeywordSettings, RawRankingSettings, RawWeights},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Tier weights: merged per tier, so a file may override a single tier
/// - Phrase lists: unioned, highest precedence entries first, duplicates dropped
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let ranking = merge_ranking_settings(configs);
    let keywords = merge_keyword_settings(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Config {
        ranking,
        keywords,
        config_root,
    }
}

/// Merges ranking settings, taking the highest-precedence value for each field.
fn merge_ranking_settings(configs: &[ParsedConfig]) -> RankingSettings {
    let mut result = RankingSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref ranking) = parsed.config.ranking {
            apply_raw_ranking(&mut result, ranking);
        }
    }

    result
}

/// Applies raw ranking settings to result, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingSettings, raw: &RawRankingSettings) {
    if let Some(ref v) = raw.window {
        result.window = v.clone();
    }
    if let Some(ref w) = raw.weights {
        apply_raw_weights(&mut result.weights, w);
    }
}

/// Applies raw weights to result, one tier at a time.
fn apply_raw_weights(result: &mut WeightSettings, raw: &RawWeights) {
    if let Some(v) = raw.t1 {
        result.t1 = v;
    }
    if let Some(v) = raw.t2 {
        result.t2 = v;
    }
    if let Some(v) = raw.t3 {
        result.t3 = v;
    }
}

/// Merges keyword settings.
fn merge_keyword_settings(configs: &[ParsedConfig]) -> KeywordSettings {
    let mut result = KeywordSettings::default();

    // Scalars: lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref keywords) = parsed.config.keywords {
            apply_raw_keyword_scalars(&mut result, keywords);
        }
    }

    // Lists: highest precedence first so their entries lead the merged list.
    let sections: Vec<&RawKeywordSettings> = configs
        .iter()
        .filter_map(|c| c.config.keywords.as_ref())
        .collect();
    result.stop_phrases = union_lists(sections.iter().filter_map(|k| k.stop_phrases.as_ref()));
    result.domain_words = union_lists(sections.iter().filter_map(|k| k.domain_words.as_ref()));

    result
}

/// Applies raw keyword scalars to result.
fn apply_raw_keyword_scalars(result: &mut KeywordSettings, raw: &RawKeywordSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.iso_stopwords {
        result.iso_stopwords = v;
    }
    if let Some(v) = raw.collation {
        result.collation = v;
    }
    if let Some(ref w) = raw.weights {
        apply_raw_weights(&mut result.weights, w);
    }
}

/// Concatenates lists in order, keeping the first occurrence of each entry.
fn union_lists<'a>(lists: impl Iterator<Item = &'a Vec<String>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for entry in lists.flatten() {
        if seen.insert(entry.as_str()) {
            merged.push(entry.clone());
        }
    }
    merged
}
