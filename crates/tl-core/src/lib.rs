//! Rating model, time windows and teacher ranking for tl.
//!
//! Ratings arrive from an external service as immutable records. This crate turns them into a
//! popularity ranking:
//!
//! 1. **Validity**: a rating counts only while its dislikes do not exceed its likes
//! 2. **Time windows**: ratings are narrowed to a named period (`today`, `month`, ...)
//! 3. **Tier scoring**: valid ratings are tallied per teacher and weighted by tier
//! 4. **Ranking**: teachers are ordered by their weighted total score
//!
//! Everything here is a pure function of its inputs and the supplied "now"; nothing is cached
//! between calls.

#![warn(missing_docs)]

mod model;
mod rank;
mod score;
pub mod script;
mod window;

pub use model::{Id, Rating, Teacher, Tier};
pub use rank::{RankedTeacher, RankingEngine, rank_teachers};
pub use score::{TeacherStats, TierScorer, TierWeights};
pub use window::{TimeWindow, filter_by_window};
