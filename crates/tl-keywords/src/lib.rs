//! Keyword mining over rating comments.
//!
//! [`KeywordExtractor`] finds the phrases that best characterize a set of ratings. Comments are
//! treated as documents, candidate phrases are sliding windows over their ideographs, and each
//! phrase is scored with a TF-IDF variant weighted by the tier of the ratings that mention it.
//!
//! ```
//! use chrono::Utc;
//! use tl_core::Rating;
//! use tl_keywords::extract_keywords;
//!
//! let now = Utc::now();
//! let ratings = vec![
//!     Rating::new(1, 7, "T3", "作业很多但是讲得清楚", now),
//!     Rating::new(2, 7, "T3", "作业多，讲得清楚", now),
//!     Rating::new(3, 7, "T2", "讲得清楚", now),
//! ];
//! let keywords = extract_keywords(&ratings, 3);
//! assert!(keywords.len() <= 3);
//! ```

#![warn(missing_docs)]

mod collate;
mod extract;
mod lexicon;

pub use collate::{ChineseCollator, CodepointCollator, Collator};
pub use extract::{KeywordExtractor, ScoredKeyword};
pub use lexicon::{DomainWords, StopPhrases};
use tl_core::Rating;

/// Extracts up to `limit` keywords with the built-in lists and weights.
pub fn extract_keywords<'a, I>(ratings: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a Rating>,
{
    KeywordExtractor::new().extract(ratings, limit)
}
