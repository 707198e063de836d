//! Weighted TF-IDF phrase mining.
//!
//! Each valid rating with a non-trivial comment is one document. Its text is reduced to
//! ideographs, every 2-4 character window that is not anchored on a stop phrase becomes a
//! candidate, and 5 character windows are admitted when they mention domain vocabulary. A
//! phrase's score is `tf * idf * s`, where `s` sums the tier weights of the ratings it came
//! from. The sorted candidates then go through a greedy pass that drops phrases buried in the
//! middle of a comparable longer phrase.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use serde::Serialize;
use tl_config::KeywordSettings;
use tl_core::{Rating, TierWeights, script};
use tracing::{debug, trace};

use crate::{ChineseCollator, Collator, DomainWords, StopPhrases};

/// Minimum comment length for a rating to count as a document.
///
/// Comments are measured in UTF-16 code units, so a lone emoji such as "👍" is long enough
/// to count toward the document total even though it yields no candidates.
const MIN_TEXT_LEN: usize = 2;
/// Shortest sliding window.
const MIN_WINDOW: usize = 2;
/// Longest window generated unconditionally.
const MAX_WINDOW: usize = 4;
/// Window length that requires domain vocabulary.
const DOMAIN_WINDOW: usize = 5;
/// Score a phrase seen in a single document must reach to be kept.
const MIN_SINGLE_DOC_SCORE: f64 = 5.0;
/// Scores closer than this are treated as tied.
const SCORE_TOLERANCE: f64 = 0.1;
/// Fraction of a containing phrase's score needed to survive containment.
const CONTAINMENT_RATIO: f64 = 0.8;

/// A mined phrase with the statistics behind its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredKeyword {
    /// The phrase.
    pub phrase: String,
    /// Final score, `tf * idf * weight`.
    pub score: f64,
    /// Number of documents containing the phrase.
    pub document_frequency: usize,
    /// Occurrences counted toward term frequency (at most one per document).
    pub occurrences: usize,
    /// Sum of tier weights over the documents containing the phrase.
    pub weight: u64,
}

impl ScoredKeyword {
    /// Length of the phrase in characters.
    fn char_len(&self) -> usize {
        self.phrase.chars().count()
    }
}

/// Per-phrase accumulator.
#[derive(Debug, Default)]
struct PhraseStats {
    /// Occurrences, once per document.
    occurrences: usize,
    /// Summed tier weight.
    weight: u64,
    /// Documents containing the phrase.
    documents: usize,
}

/// Phrase statistics in first-seen order.
#[derive(Debug, Default)]
struct PhraseTable {
    /// Phrases and their statistics, in the order they were first seen.
    entries: Vec<(String, PhraseStats)>,
    /// Position of each phrase in `entries`.
    index: HashMap<String, usize>,
}

impl PhraseTable {
    /// Records one document's occurrence of `phrase`.
    fn record(&mut self, phrase: String, weight: u32) {
        let slot = match self.index.get(&phrase) {
            Some(&i) => i,
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, PhraseStats::default()));
                self.entries.len() - 1
            }
        };
        let stats = &mut self.entries[slot].1;
        stats.occurrences += 1;
        stats.weight += u64::from(weight);
        stats.documents += 1;
    }

    /// Number of distinct phrases.
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Mines the most significant phrases from rating comments.
///
/// The collator breaks ties left after score, document frequency and phrase length; the
/// default orders by pinyin.
#[derive(Debug, Clone)]
pub struct KeywordExtractor<C = ChineseCollator> {
    /// Word-importance weight per tier.
    weights: TierWeights,
    /// Phrases never reported.
    stop_phrases: StopPhrases,
    /// Vocabulary admitting five-character windows.
    domain_words: DomainWords,
    /// Final tie-break.
    collator: C,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Creates an extractor with the built-in lists, keyword weights and pinyin order.
    pub fn new() -> Self {
        Self {
            weights: TierWeights::KEYWORD,
            stop_phrases: StopPhrases::new(),
            domain_words: DomainWords::new(),
            collator: ChineseCollator::pinyin(),
        }
    }

    /// Creates an extractor from configuration.
    ///
    /// Configured phrases are added to the built-in lists rather than replacing them.
    pub fn from_settings(settings: &KeywordSettings) -> Self {
        let mut stop_phrases = StopPhrases::new();
        if settings.iso_stopwords {
            stop_phrases = stop_phrases.with_iso_chinese();
        }
        stop_phrases.extend(settings.stop_phrases.iter().cloned());

        let mut domain_words = DomainWords::new();
        domain_words.extend(settings.domain_words.iter().cloned());

        Self {
            weights: settings.weights.into(),
            stop_phrases,
            domain_words,
            collator: ChineseCollator::for_setting(settings.collation),
        }
    }
}

impl<C: Collator> KeywordExtractor<C> {
    /// Replaces the tie-break collator.
    pub fn with_collator<D: Collator>(self, collator: D) -> KeywordExtractor<D> {
        KeywordExtractor {
            weights: self.weights,
            stop_phrases: self.stop_phrases,
            domain_words: self.domain_words,
            collator,
        }
    }

    /// Sets the word-importance weight per tier.
    pub fn with_weights(mut self, weights: TierWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the stop list.
    pub fn with_stop_phrases(mut self, stop_phrases: StopPhrases) -> Self {
        self.stop_phrases = stop_phrases;
        self
    }

    /// Replaces the domain vocabulary.
    pub fn with_domain_words(mut self, domain_words: DomainWords) -> Self {
        self.domain_words = domain_words;
        self
    }

    /// Returns up to `limit` phrases, most significant first.
    pub fn extract<'a, I>(&self, ratings: I, limit: usize) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Rating>,
    {
        self.extract_scored(ratings, limit)
            .into_iter()
            .map(|k| k.phrase)
            .collect()
    }

    /// Returns up to `limit` phrases with their statistics, most significant first.
    pub fn extract_scored<'a, I>(&self, ratings: I, limit: usize) -> Vec<ScoredKeyword>
    where
        I: IntoIterator<Item = &'a Rating>,
    {
        let documents: Vec<(&str, u32)> = ratings
            .into_iter()
            .filter(|r| r.is_valid())
            .map(|r| (r.reason.trim(), self.document_weight(r)))
            .filter(|(text, _)| text.encode_utf16().count() >= MIN_TEXT_LEN)
            .collect();
        if documents.is_empty() {
            debug!("no usable comments");
            return Vec::new();
        }

        let mut table = PhraseTable::default();
        for &(text, weight) in &documents {
            self.collect_phrases(text, weight, &mut table);
        }
        debug!(
            documents = documents.len(),
            phrases = table.len(),
            "generated candidates"
        );

        let mut candidates = score_phrases(table, documents.len());
        debug!(kept = candidates.len(), "scored candidates");

        sort_candidates(&mut candidates, &self.collator);
        resolve_containment(candidates, limit)
    }

    /// Tier weight of one document; unrecognized tiers get the lowest weight.
    fn document_weight(&self, rating: &Rating) -> u32 {
        self.weights
            .weight(&rating.tier)
            .unwrap_or_else(|| self.weights.lowest())
    }

    /// Adds every candidate phrase of one document to `table`, each at most once.
    fn collect_phrases(&self, text: &str, weight: u32, table: &mut PhraseTable) {
        let chars = script::ideographs(text);
        if chars.len() < MIN_TEXT_LEN {
            return;
        }

        let mut seen = HashSet::new();
        let mut accept = |phrase: String, table: &mut PhraseTable| {
            if seen.insert(phrase.clone()) {
                table.record(phrase, weight);
            }
        };

        for len in MIN_WINDOW..=MAX_WINDOW {
            for window in chars.windows(len) {
                if let Some(phrase) = self.plain_candidate(window) {
                    accept(phrase, table);
                }
            }
        }
        for window in chars.windows(DOMAIN_WINDOW) {
            if !self.domain_words.occurs_in(window) {
                continue;
            }
            let phrase: String = window.iter().collect();
            if self.stop_phrases.contains(&phrase) {
                trace!(%phrase, "skipping stop phrase");
                continue;
            }
            accept(phrase, table);
        }
    }

    /// Returns the window as a phrase unless it is, or starts or ends with, a stop phrase.
    ///
    /// Only the leading and trailing bigrams are checked; a stop bigram in the interior of a
    /// four-character window does not disqualify it.
    fn plain_candidate(&self, window: &[char]) -> Option<String> {
        let phrase: String = window.iter().collect();
        if self.stop_phrases.contains(&phrase) {
            trace!(%phrase, "skipping stop phrase");
            return None;
        }
        let lead: String = window[..MIN_WINDOW].iter().collect();
        let tail: String = window[window.len() - MIN_WINDOW..].iter().collect();
        if self.stop_phrases.contains(&lead) || self.stop_phrases.contains(&tail) {
            trace!(%phrase, "skipping phrase anchored on a stop bigram");
            return None;
        }
        Some(phrase)
    }
}

/// Computes final scores and drops phrases without enough support.
fn score_phrases(table: PhraseTable, total_documents: usize) -> Vec<ScoredKeyword> {
    let total = total_documents as f64;
    table
        .entries
        .into_iter()
        .map(|(phrase, stats)| {
            let tf = stats.occurrences as f64 / total;
            let idf = (total / (stats.documents as f64 + 1.0)).ln();
            ScoredKeyword {
                phrase,
                score: tf * idf * stats.weight as f64,
                document_frequency: stats.documents,
                occurrences: stats.occurrences,
                weight: stats.weight,
            }
        })
        .filter(|k| {
            k.document_frequency >= 2
                || (k.document_frequency == 1 && k.score >= MIN_SINGLE_DOC_SCORE)
        })
        .filter(|k| script::contains_ideograph(&k.phrase))
        .collect()
}

/// Ranking order of two candidates.
///
/// Scores within [`SCORE_TOLERANCE`] compare equal and fall through to document frequency,
/// phrase length and collation. The tolerance makes this relation non-transitive, so it must
/// only drive a sort that never assumes a total order.
fn compare_candidates<C: Collator>(
    a: &ScoredKeyword,
    b: &ScoredKeyword,
    collator: &C,
) -> Ordering {
    if (b.score - a.score).abs() > SCORE_TOLERANCE {
        return b.score.total_cmp(&a.score);
    }
    b.document_frequency
        .cmp(&a.document_frequency)
        .then_with(|| b.char_len().cmp(&a.char_len()))
        .then_with(|| collator.compare(&a.phrase, &b.phrase))
}

/// Stable insertion sort by [`compare_candidates`], starting from first-seen order.
fn sort_candidates<C: Collator>(candidates: &mut [ScoredKeyword], collator: &C) {
    for i in 1..candidates.len() {
        let mut j = i;
        while j > 0 && compare_candidates(&candidates[j - 1], &candidates[j], collator).is_gt() {
            candidates.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Returns true if `inner` first occurs in `outer` away from both ends.
fn strictly_inside(outer: &str, inner: &str) -> bool {
    if outer == inner {
        return false;
    }
    outer
        .find(inner)
        .is_some_and(|idx| idx > 0 && idx + inner.len() < outer.len())
}

/// Greedily accepts sorted candidates, suppressing phrases buried inside comparable ones.
fn resolve_containment(candidates: Vec<ScoredKeyword>, limit: usize) -> Vec<ScoredKeyword> {
    let mut accepted: Vec<ScoredKeyword> = Vec::new();

    for candidate in candidates {
        if accepted.len() >= limit {
            break;
        }
        let buried = accepted.iter().any(|existing| {
            strictly_inside(&existing.phrase, &candidate.phrase)
                && candidate.score < existing.score * CONTAINMENT_RATIO
        });
        if buried {
            trace!(phrase = %candidate.phrase, "skipping phrase inside an accepted phrase");
            continue;
        }

        let before = accepted.len();
        accepted.retain(|existing| {
            !(strictly_inside(&candidate.phrase, &existing.phrase)
                && candidate.score >= existing.score * CONTAINMENT_RATIO)
        });
        if accepted.len() < before {
            debug!(
                phrase = %candidate.phrase,
                removed = before - accepted.len(),
                "longer phrase replaced contained phrases"
            );
        }
        accepted.push(candidate);
    }

    accepted.truncate(limit);
    accepted
}
