//! Teacher popularity ranking.
//!
//! The ranking filters ratings to a time window once, tallies every teacher over the filtered
//! set, and orders teachers by weighted total score. Teachers with no ratings in the window
//! still appear, with zeroed statistics.

use std::cmp::Ordering;

use chrono::{DateTime, Local, TimeZone};
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::debug;

use crate::{Rating, Teacher, TeacherStats, TierScorer, TierWeights, TimeWindow, filter_by_window};

/// A teacher record merged with its computed statistics.
///
/// Serializes as a single flat object: the teacher's own fields followed by `countT1`,
/// `countT2`, `countT3`, `totalScore` and `count`. A teacher field with one of those names is
/// replaced by the computed value.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeacher {
    /// The input teacher record.
    pub teacher: Teacher,
    /// Statistics over the teacher's valid ratings in the window.
    pub stats: TeacherStats,
}

impl Serialize for RankedTeacher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stats = self.stats.fields();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.teacher.id)?;
        for (key, value) in &self.teacher.attributes {
            if !stats.iter().any(|(name, _)| *name == key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        for (name, value) in stats {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Orders ranked teachers: higher total score first, then lower id.
///
/// The id tie-break keeps output stable regardless of input order.
fn compare_ranked(a: &RankedTeacher, b: &RankedTeacher) -> Ordering {
    b.stats
        .total_score
        .cmp(&a.stats.total_score)
        .then_with(|| a.teacher.id.cmp(&b.teacher.id))
}

/// Produces teacher rankings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    /// Tallies each teacher's ratings.
    scorer: TierScorer,
}

impl RankingEngine {
    /// Creates an engine with custom tier weights.
    pub fn new(weights: TierWeights) -> Self {
        Self {
            scorer: TierScorer::new(weights),
        }
    }

    /// Ranks teachers using the local clock for window boundaries.
    pub fn rank(
        &self,
        teachers: &[Teacher],
        ratings: &[Rating],
        window: TimeWindow,
    ) -> Vec<RankedTeacher> {
        self.rank_at(teachers, ratings, window, &Local::now())
    }

    /// Ranks teachers with window boundaries computed from `now`.
    pub fn rank_at<Tz: TimeZone>(
        &self,
        teachers: &[Teacher],
        ratings: &[Rating],
        window: TimeWindow,
        now: &DateTime<Tz>,
    ) -> Vec<RankedTeacher> {
        let in_window = filter_by_window(ratings, window, now);
        let by_teacher = self.scorer.score_by_teacher(in_window.iter());

        let mut ranked: Vec<RankedTeacher> = teachers
            .iter()
            .map(|teacher| RankedTeacher {
                teacher: teacher.clone(),
                stats: by_teacher.get(&teacher.id).copied().unwrap_or_default(),
            })
            .collect();
        ranked.sort_by(compare_ranked);

        debug!(
            teachers = ranked.len(),
            ratings = in_window.len(),
            %window,
            "ranked teachers"
        );
        ranked
    }
}

/// Ranks teachers with the default weights and the local clock.
pub fn rank_teachers(
    teachers: &[Teacher],
    ratings: &[Rating],
    window: TimeWindow,
) -> Vec<RankedTeacher> {
    RankingEngine::default().rank(teachers, ratings, window)
}
