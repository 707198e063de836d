//! The script family rating comments are written in.
//!
//! Only CJK Unified Ideographs in the basic block are treated as meaningful text. Everything
//! else (punctuation, Latin letters, digits, emoji) is noise for keyword purposes.

use std::ops::RangeInclusive;

/// Code points treated as ideographs.
pub const IDEOGRAPH_RANGE: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// Returns true if `c` lies in [`IDEOGRAPH_RANGE`].
pub fn is_ideograph(c: char) -> bool {
    IDEOGRAPH_RANGE.contains(&c)
}

/// Returns true if `text` contains at least one ideograph.
pub fn contains_ideograph(text: &str) -> bool {
    text.chars().any(is_ideograph)
}

/// Returns true if `text` is non-empty and made only of ideographs.
///
/// Only such text can equal a phrase cut from a normalized comment.
pub fn is_ideographic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_ideograph)
}

/// Keeps only the ideographs of `text`, in order.
pub fn ideographs(text: &str) -> Vec<char> {
    text.chars().filter(|c| is_ideograph(*c)).collect()
}
