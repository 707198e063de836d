//! End-to-end keyword extraction tests.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use chrono::{DateTime, TimeZone, Utc};
use tl_config::{Collation, KeywordSettings};
use tl_core::Rating;
use tl_keywords::{CodepointCollator, KeywordExtractor, ScoredKeyword, extract_keywords};

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 9, 8, 30, 0).unwrap()
}

fn rating(id: i64, tier: &str, reason: &str) -> Rating {
    Rating::new(id, 1, tier, reason, at())
}

/// Six comments: a popular phrase, a T1 complaint and some one-off remarks.
fn classroom() -> Vec<Rating> {
    vec![
        rating(1, "T3", "板书工整"),
        rating(2, "T3", "板书工整！"),
        rating(3, "T2", "板书漂亮"),
        rating(4, "T1", "声音太小"),
        rating(5, "T1", "声音太小..."),
        rating(6, "T3", "点名频繁"),
    ]
}

fn strictly_inside(outer: &str, inner: &str) -> bool {
    outer != inner
        && outer
            .find(inner)
            .is_some_and(|idx| idx > 0 && idx + inner.len() < outer.len())
}

#[test]
fn empty_input_yields_nothing() {
    assert!(extract_keywords(&Vec::<Rating>::new(), 5).is_empty());
}

#[test]
fn invalid_ratings_are_ignored() {
    let ratings: Vec<Rating> = classroom()
        .into_iter()
        .map(|r| r.with_votes(0, 1))
        .collect();
    assert!(extract_keywords(&ratings, 5).is_empty());
}

#[test]
fn short_and_non_ideographic_comments_are_ignored() {
    let ratings = vec![
        rating(1, "T3", "好"),
        rating(2, "T3", "  "),
        rating(3, "T3", "great lecturer"),
        rating(4, "T3", "A+ 好"),
    ];
    assert!(extract_keywords(&ratings, 5).is_empty());
}

#[test]
fn ranks_supported_phrases() {
    let keywords = extract_keywords(&classroom(), 5);
    // ties within a length fall back to pinyin: ban < shu, gong < shu
    assert_eq!(keywords, vec!["板书", "板书工整", "板书工", "书工整", "工整"]);
}

#[test]
fn emoji_comments_count_as_documents() {
    let mut ratings = vec![
        rating(1, "T3", "板书工整"),
        rating(2, "T3", "板书工整"),
        rating(3, "T1", "声音太小"),
        rating(4, "T1", "声音太小"),
        rating(5, "T1", "声音太小"),
        rating(6, "T1", "声音太小"),
        rating(7, "T1", "点名频繁"),
        rating(8, "T1", "幽默风趣"),
    ];
    assert_eq!(extract_keywords(&ratings, 1), vec!["板书工整"]);

    // A lone emoji is two UTF-16 units: it yields no phrases but dilutes every idf.
    ratings.extend((100..122).map(|id| rating(id, "T2", "👍")));
    assert_eq!(extract_keywords(&ratings, 1), vec!["声音太小"]);
}

#[test]
fn reports_statistics() {
    let scored = KeywordExtractor::new().extract_scored(&classroom(), 1);
    assert_eq!(scored.len(), 1);

    let top: &ScoredKeyword = &scored[0];
    assert_eq!(top.phrase, "板书");
    assert_eq!(top.document_frequency, 3);
    assert_eq!(top.occurrences, 3);
    assert_eq!(top.weight, 8);
    let expected = 0.5 * (6.0_f64 / 4.0).ln() * 8.0;
    assert!((top.score - expected).abs() < 1e-9);
}

#[test]
fn collator_breaks_remaining_ties() {
    let codepoint = KeywordExtractor::new().with_collator(CodepointCollator);
    let keywords = codepoint.extract(&classroom(), 5);
    assert_eq!(keywords, vec!["板书", "板书工整", "书工整", "板书工", "书工"]);

    let reversed = KeywordExtractor::new().with_collator(|a: &str, b: &str| b.cmp(a));
    let keywords = reversed.extract(&classroom(), 5);
    assert_eq!(keywords, vec!["板书", "板书工整", "板书工", "书工整", "工整"]);
}

/// Two identical comments and one unrelated: every shared phrase scores exactly zero, so only
/// length and collation order them.
fn zero_scores() -> Vec<Rating> {
    vec![
        rating(1, "T2", "作业太多"),
        rating(2, "T2", "作业太多"),
        rating(3, "T2", "讲课清楚"),
    ]
}

#[test]
fn pinyin_order_breaks_ties_by_default() {
    let keywords = extract_keywords(&zero_scores(), 5);
    // tai < ye < zuo
    assert_eq!(keywords, vec!["作业太多", "业太多", "作业太", "太多", "业太"]);
}

#[test]
fn codepoint_collation_from_settings() {
    let settings = KeywordSettings {
        collation: Collation::Codepoint,
        ..KeywordSettings::default()
    };
    let keywords = KeywordExtractor::from_settings(&settings).extract(&zero_scores(), 5);
    assert_eq!(keywords, vec!["作业太多", "业太多", "作业太", "业太", "作业"]);

    let defaults = KeywordExtractor::from_settings(&KeywordSettings::default());
    assert_eq!(
        defaults.extract(&zero_scores(), 5),
        extract_keywords(&zero_scores(), 5)
    );
}

#[test]
fn result_never_exceeds_limit() {
    let ratings = classroom();
    for limit in 0..=20 {
        assert!(extract_keywords(&ratings, limit).len() <= limit);
    }
    assert!(extract_keywords(&ratings, 0).is_empty());
}

#[test]
fn extraction_is_deterministic() {
    let ratings = classroom();
    let first = KeywordExtractor::new().extract_scored(&ratings, 50);
    for _ in 0..5 {
        assert_eq!(KeywordExtractor::new().extract_scored(&ratings, 50), first);
    }
}

#[test]
fn buried_phrases_never_appear_with_their_container() {
    let ratings = vec![
        rating(1, "T3", "作业太多了，作业太多"),
        rating(2, "T3", "作业太多"),
        rating(3, "T1", "毕业太难"),
        rating(4, "T1", "毕业太难了"),
        rating(5, "T1", "就业太难"),
        rating(6, "T1", "学业太重"),
        rating(7, "T1", "课业太重"),
        rating(8, "T1", "专业太偏"),
        rating(9, "T2", "讲得清楚"),
        rating(10, "T2", "讲得清楚"),
    ];
    let scored = KeywordExtractor::new().extract_scored(&ratings, 100);
    assert!(!scored.is_empty());

    for outer in &scored {
        for inner in &scored {
            if strictly_inside(&outer.phrase, &inner.phrase) {
                assert!(
                    inner.score >= outer.score * 0.8,
                    "{} kept alongside {}",
                    inner.phrase,
                    outer.phrase
                );
            }
        }
    }
}

#[test]
fn stop_phrases_anchor_no_candidates() {
    let ratings = vec![
        rating(1, "T3", "老师人很好"),
        rating(2, "T3", "老师人很好"),
        rating(3, "T3", "老师人很好"),
    ];
    let keywords = extract_keywords(&ratings, 20);
    assert!(!keywords.is_empty());
    assert!(keywords.iter().all(|k| !k.starts_with("老师")));
}

#[test]
fn five_character_phrases_need_domain_words() {
    let ratings = vec![
        rating(1, "T3", "作业布置合理"),
        rating(2, "T3", "作业布置合理"),
    ];
    let keywords = extract_keywords(&ratings, 100);
    assert_eq!(keywords.first().map(String::as_str), Some("作业布置合"));
    assert!(!keywords.iter().any(|k| k == "业布置合理"));
}

#[test]
fn configured_stop_phrases_extend_builtins() {
    let settings = KeywordSettings {
        stop_phrases: vec!["板书".into()],
        ..KeywordSettings::default()
    };
    let keywords = KeywordExtractor::from_settings(&settings).extract(&classroom(), 20);
    assert!(!keywords.is_empty());
    assert!(keywords.iter().all(|k| !k.starts_with("板书")));
}
