//! Ordering of phrases that tie on every numeric key.

use std::{cmp::Ordering, fmt};

use icu_collator::{Collator as IcuCollator, CollatorOptions};
use icu_locid::locale;
use tl_config::Collation;
use tracing::warn;

/// Orders two phrases for the final tie-break of the keyword sort.
///
/// Closures of type `Fn(&str, &str) -> Ordering` implement this trait, so a locale-aware
/// comparison can be plugged in without a wrapper type.
pub trait Collator {
    /// Compares `a` with `b`; `Less` places `a` first.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Orders phrases by Unicode code point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointCollator;

impl Collator for CodepointCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Orders phrases the way a Simplified Chinese reader expects: by pinyin.
///
/// Uses the CLDR `zh` tailoring. If that data cannot be loaded, or code point order was
/// requested, phrases are compared by code point instead.
pub struct ChineseCollator {
    /// The `zh` collator, absent when falling back to code point order.
    pinyin: Option<IcuCollator>,
}

impl ChineseCollator {
    /// Creates a pinyin collator, falling back to code point order if `zh` data is missing.
    pub fn pinyin() -> Self {
        match IcuCollator::try_new(&locale!("zh").into(), CollatorOptions::new()) {
            Ok(collator) => Self {
                pinyin: Some(collator),
            },
            Err(e) => {
                warn!(error = %e, "zh collation unavailable, using code point order");
                Self::codepoint()
            }
        }
    }

    /// Creates a collator that orders by code point.
    pub fn codepoint() -> Self {
        Self { pinyin: None }
    }

    /// Creates the collator selected in configuration.
    pub fn for_setting(collation: Collation) -> Self {
        match collation {
            Collation::Pinyin => Self::pinyin(),
            Collation::Codepoint => Self::codepoint(),
        }
    }

    /// Returns true if phrases are compared by pinyin.
    pub fn is_pinyin(&self) -> bool {
        self.pinyin.is_some()
    }
}

impl Default for ChineseCollator {
    fn default() -> Self {
        Self::pinyin()
    }
}

impl fmt::Debug for ChineseCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChineseCollator")
            .field("pinyin", &self.is_pinyin())
            .finish()
    }
}

impl Collator for ChineseCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.pinyin {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_order() {
        assert_eq!(CodepointCollator.compare("作业", "考试"), Ordering::Less);
        assert_eq!(CodepointCollator.compare("考试", "考试"), Ordering::Equal);
    }

    #[test]
    fn test_closure_collator() {
        let reversed = |a: &str, b: &str| b.cmp(a);
        assert_eq!(reversed.compare("作业", "考试"), Ordering::Greater);
    }

    #[test]
    fn test_pinyin_order() {
        let collator = ChineseCollator::pinyin();
        assert!(collator.is_pinyin());
        // tai < ye < zuo, although 作 (U+4F5C) precedes 太 (U+592A) by code point
        assert_eq!(collator.compare("太多", "作业"), Ordering::Less);
        assert_eq!(collator.compare("业太", "作业"), Ordering::Less);
        assert_eq!(collator.compare("太多", "业太"), Ordering::Less);
        // ban < shu
        assert_eq!(collator.compare("板书工", "书工整"), Ordering::Less);
        assert_eq!(collator.compare("作业", "作业"), Ordering::Equal);
    }

    #[test]
    fn test_codepoint_fallback() {
        let collator = ChineseCollator::for_setting(Collation::Codepoint);
        assert!(!collator.is_pinyin());
        assert_eq!(collator.compare("太多", "作业"), Ordering::Greater);
        assert_eq!(format!("{collator:?}"), "ChineseCollator { pinyin: false }");
    }
}
