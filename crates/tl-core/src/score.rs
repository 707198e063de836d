//! Per-teacher tier tallies.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{Id, Rating, Tier};

/// Points contributed by each tier.
///
/// Two sets of weights are in use: [`TierWeights::RANKING`] drives the popularity score, and
/// [`TierWeights::KEYWORD`] scales how much a comment's words matter during keyword mining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierWeights {
    /// Weight of a `T1` rating.
    pub t1: u32,
    /// Weight of a `T2` rating.
    pub t2: u32,
    /// Weight of a `T3` rating.
    pub t3: u32,
}

impl TierWeights {
    /// Popularity weights used for ranking.
    pub const RANKING: Self = Self {
        t1: 5,
        t2: 10,
        t3: 15,
    };

    /// Word-importance weights used for keyword mining.
    pub const KEYWORD: Self = Self {
        t1: 1,
        t2: 2,
        t3: 3,
    };

    /// Returns the weight for `tier`, or `None` if the tier is unrecognized.
    pub fn weight(&self, tier: &Tier) -> Option<u32> {
        match tier {
            Tier::T1 => Some(self.t1),
            Tier::T2 => Some(self.t2),
            Tier::T3 => Some(self.t3),
            Tier::Unrecognized(_) => None,
        }
    }

    /// Returns the smallest of the three weights.
    pub fn lowest(&self) -> u32 {
        self.t1.min(self.t2).min(self.t3)
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self::RANKING
    }
}

/// Statistics computed for one teacher from their valid ratings.
///
/// Serializes as `countT1`, `countT2`, `countT3`, `totalScore` and `count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherStats {
    /// Valid `T1` ratings.
    pub count_t1: u32,
    /// Valid `T2` ratings.
    pub count_t2: u32,
    /// Valid `T3` ratings.
    pub count_t3: u32,
    /// Weighted sum over all counted ratings.
    pub total_score: u64,
    /// Number of counted ratings.
    pub count: u32,
}

impl TeacherStats {
    /// Output field names with their values, in output order.
    pub fn fields(&self) -> [(&'static str, u64); 5] {
        [
            ("countT1", u64::from(self.count_t1)),
            ("countT2", u64::from(self.count_t2)),
            ("countT3", u64::from(self.count_t3)),
            ("totalScore", self.total_score),
            ("count", u64::from(self.count)),
        ]
    }

    /// Adds one valid rating to the tally.
    ///
    /// Unrecognized tiers are ignored entirely: they add no score and bump no counter.
    fn record(&mut self, tier: &Tier, weights: &TierWeights) {
        let (counter, weight) = match tier {
            Tier::T1 => (&mut self.count_t1, weights.t1),
            Tier::T2 => (&mut self.count_t2, weights.t2),
            Tier::T3 => (&mut self.count_t3, weights.t3),
            Tier::Unrecognized(_) => return,
        };
        *counter += 1;
        self.total_score += u64::from(weight);
        self.count += 1;
    }
}

impl Serialize for TeacherStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Tallies valid ratings into [`TeacherStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TierScorer {
    /// Points per tier.
    weights: TierWeights,
}

impl TierScorer {
    /// Creates a scorer with custom weights.
    pub fn new(weights: TierWeights) -> Self {
        Self { weights }
    }

    /// Returns the weights in use.
    pub fn weights(&self) -> TierWeights {
        self.weights
    }

    /// Computes statistics for one teacher.
    ///
    /// Ratings for other teachers and invalid ratings are skipped.
    pub fn score<'a, I>(&self, teacher_id: &Id, ratings: I) -> TeacherStats
    where
        I: IntoIterator<Item = &'a Rating>,
    {
        let mut stats = TeacherStats::default();
        for rating in ratings {
            if rating.teacher_id == *teacher_id && rating.is_valid() {
                stats.record(&rating.tier, &self.weights);
            }
        }
        stats
    }

    /// Computes statistics for every teacher referenced by `ratings` in a single pass.
    ///
    /// Teachers whose ratings are all invalid still appear, with empty statistics.
    pub fn score_by_teacher<'a, I>(&self, ratings: I) -> HashMap<&'a Id, TeacherStats>
    where
        I: IntoIterator<Item = &'a Rating>,
    {
        let mut by_teacher: HashMap<&'a Id, TeacherStats> = HashMap::new();
        for rating in ratings {
            let stats = by_teacher.entry(&rating.teacher_id).or_default();
            if rating.is_valid() {
                stats.record(&rating.tier, &self.weights);
            }
        }
        by_teacher
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()
    }

    fn rating(id: i32, teacher: i32, tier: &str) -> Rating {
        Rating::new(id, teacher, tier, "", at())
    }

    #[test]
    fn weights_lookup() {
        assert_eq!(TierWeights::RANKING.weight(&Tier::T2), Some(10));
        assert_eq!(TierWeights::KEYWORD.weight(&Tier::T3), Some(3));
        assert_eq!(TierWeights::RANKING.weight(&Tier::from("X")), None);
        assert_eq!(TierWeights::KEYWORD.lowest(), 1);
    }

    #[test]
    fn two_t1_and_one_t2_score_twenty() {
        let ratings = vec![rating(1, 7, "T1"), rating(2, 7, "T1"), rating(3, 7, "T2")];
        let stats = TierScorer::default().score(&Id::Number(7), &ratings);

        assert_eq!(
            stats,
            TeacherStats {
                count_t1: 2,
                count_t2: 1,
                count_t3: 0,
                total_score: 20,
                count: 3,
            }
        );
    }

    #[test]
    fn invalid_ratings_are_ignored() {
        let ratings = vec![
            rating(1, 7, "T3").with_votes(0, 1),
            rating(2, 7, "T3").with_votes(2, 2),
        ];
        let stats = TierScorer::default().score(&Id::Number(7), &ratings);

        assert_eq!(stats.count_t3, 1);
        assert_eq!(stats.total_score, 15);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn other_teachers_are_ignored() {
        let ratings = vec![rating(1, 7, "T3"), rating(2, 8, "T3")];
        let stats = TierScorer::default().score(&Id::Number(8), &ratings);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.total_score, 15);
    }

    #[test]
    fn unrecognized_tier_adds_nothing() {
        let ratings = vec![rating(1, 7, "T4"), rating(2, 7, "T1")];
        let stats = TierScorer::default().score(&Id::Number(7), &ratings);

        assert_eq!(stats.total_score, 5);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.count_t1 + stats.count_t2 + stats.count_t3, stats.count);
    }

    #[test]
    fn custom_weights() {
        let scorer = TierScorer::new(TierWeights { t1: 1, t2: 1, t3: 100 });
        let ratings = vec![rating(1, 7, "T3"), rating(2, 7, "T2")];
        assert_eq!(scorer.score(&Id::Number(7), &ratings).total_score, 101);
    }

    #[test]
    fn score_by_teacher_matches_individual_scores() {
        let ratings = vec![
            rating(1, 1, "T1"),
            rating(2, 2, "T3"),
            rating(3, 1, "T2"),
            rating(4, 3, "T2").with_votes(0, 5),
        ];
        let scorer = TierScorer::default();
        let grouped = scorer.score_by_teacher(&ratings);

        for id in [Id::Number(1), Id::Number(2), Id::Number(3)] {
            assert_eq!(grouped[&id], scorer.score(&id, &ratings));
        }
        assert_eq!(grouped[&Id::Number(3)], TeacherStats::default());
    }

    #[test]
    fn stats_serialize_with_service_field_names() {
        let stats = TeacherStats {
            count_t1: 1,
            count_t2: 2,
            count_t3: 3,
            total_score: 70,
            count: 6,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["countT1"], 1);
        assert_eq!(json["countT3"], 3);
        assert_eq!(json["totalScore"], 70);
        assert_eq!(json["count"], 6);
    }
}
