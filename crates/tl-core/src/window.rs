//! Named reporting periods.
//!
//! Each window except [`TimeWindow::All`] has a start boundary derived from the current moment
//! in the caller's time zone. A rating falls inside the window when it was created at or after
//! that boundary; there is no end boundary.

use std::{borrow::Cow, fmt, str};

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use tracing::debug;

use crate::Rating;

/// Month (1-based) on which the autumn semester starts.
const AUTUMN_SEMESTER_MONTH: u32 = 9;
/// Month (1-based) on which the spring semester starts.
const SPRING_SEMESTER_MONTH: u32 = 2;

/// A named reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    /// Every rating regardless of age.
    #[default]
    All,
    /// Ratings created since local midnight.
    Today,
    /// Ratings created since the first of the current month.
    Month,
    /// Ratings created since the start of the current semester.
    Semester,
    /// Ratings created since January 1.
    Year,
}

impl TimeWindow {
    /// All windows, in display order.
    pub const VARIANTS: [Self; 5] = [
        Self::All,
        Self::Today,
        Self::Month,
        Self::Semester,
        Self::Year,
    ];

    /// Returns the window's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Month => "month",
            Self::Semester => "semester",
            Self::Year => "year",
        }
    }

    /// Resolves a window name, treating anything unrecognized as [`TimeWindow::All`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns the first instant inside the window, or `None` for [`TimeWindow::All`].
    ///
    /// Calendar boundaries are computed in the time zone of `now`.
    ///
    /// Semesters run February through August and September through January. During January
    /// the semester began the previous September.
    pub fn start<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        let today = now.date_naive();
        let year = today.year();
        let first_day = match self {
            Self::All => return None,
            Self::Today => today,
            Self::Month => NaiveDate::from_ymd_opt(year, today.month(), 1)?,
            Self::Semester => match today.month() {
                m if m >= AUTUMN_SEMESTER_MONTH => {
                    NaiveDate::from_ymd_opt(year, AUTUMN_SEMESTER_MONTH, 1)?
                }
                1 => NaiveDate::from_ymd_opt(year - 1, AUTUMN_SEMESTER_MONTH, 1)?,
                _ => NaiveDate::from_ymd_opt(year, SPRING_SEMESTER_MONTH, 1)?,
            },
            Self::Year => NaiveDate::from_ymd_opt(year, 1, 1)?,
        };
        Some(local_midnight(&now.timezone(), first_day))
    }

    /// Returns true if an instant created at `at` falls inside the window.
    pub fn contains<Tz: TimeZone>(self, at: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        self.start(now).is_none_or(|start| *at >= start)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "month" => Ok(Self::Month),
            "semester" => Ok(Self::Semester),
            "year" => Ok(Self::Year),
            _ => Err(format!(
                "unknown window '{s}', expected one of: all, today, month, semester, year"
            )),
        }
    }
}

/// Returns the instant `date` begins in `tz`.
///
/// When midnight does not exist locally (a DST jump at 00:00) the UTC offset in force at that
/// wall-clock time is applied directly, which lands on the first valid instant of the day.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(at) | LocalResult::Ambiguous(at, _) => at.with_timezone(&Utc),
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&midnight).fix();
            let shifted = midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&shifted)
        }
    }
}

/// Narrows `ratings` to those created inside `window`.
///
/// [`TimeWindow::All`] borrows the input as-is. Other windows return an owned copy of the
/// matching ratings in their original order.
pub fn filter_by_window<'a, Tz: TimeZone>(
    ratings: &'a [Rating],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> Cow<'a, [Rating]> {
    let Some(start) = window.start(now) else {
        return Cow::Borrowed(ratings);
    };

    let kept: Vec<Rating> = ratings
        .iter()
        .filter(|r| r.created_at >= start)
        .cloned()
        .collect();
    debug!(
        %window,
        %start,
        kept = kept.len(),
        total = ratings.len(),
        "filtered ratings by window"
    );
    Cow::Owned(kept)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::Id;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn rating_at(id: i64, at: DateTime<Utc>) -> Rating {
        Rating::new(id, 1, "T1", "", at)
    }

    #[test]
    fn parse_and_display() {
        for window in TimeWindow::VARIANTS {
            assert_eq!(window.to_string().parse::<TimeWindow>().unwrap(), window);
        }
        assert_eq!("MONTH".parse::<TimeWindow>().unwrap(), TimeWindow::Month);
        assert!("week".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn unknown_names_behave_as_all() {
        assert_eq!(TimeWindow::from_name("week"), TimeWindow::All);
        assert_eq!(TimeWindow::from_name(""), TimeWindow::All);
        assert_eq!(TimeWindow::from_name("year"), TimeWindow::Year);
    }

    #[test]
    fn all_has_no_start() {
        assert_eq!(TimeWindow::All.start(&utc(2025, 5, 5, 5)), None);
    }

    #[test]
    fn today_starts_at_midnight() {
        let now = utc(2025, 5, 17, 15);
        assert_eq!(TimeWindow::Today.start(&now), Some(utc(2025, 5, 17, 0)));
    }

    #[test]
    fn today_uses_the_time_zone_of_now() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        // 2025-05-17 01:00 in UTC+8 is still 2025-05-16 in UTC.
        let now = tz.with_ymd_and_hms(2025, 5, 17, 1, 0, 0).unwrap();
        assert_eq!(TimeWindow::Today.start(&now), Some(utc(2025, 5, 16, 16)));
    }

    #[test]
    fn month_and_year_boundaries() {
        let now = utc(2025, 11, 20, 9);
        assert_eq!(TimeWindow::Month.start(&now), Some(utc(2025, 11, 1, 0)));
        assert_eq!(TimeWindow::Year.start(&now), Some(utc(2025, 1, 1, 0)));
    }

    #[test]
    fn semester_autumn_months_start_in_september() {
        assert_eq!(
            TimeWindow::Semester.start(&utc(2025, 9, 1, 0)),
            Some(utc(2025, 9, 1, 0))
        );
        assert_eq!(
            TimeWindow::Semester.start(&utc(2025, 12, 31, 23)),
            Some(utc(2025, 9, 1, 0))
        );
    }

    #[test]
    fn semester_in_january_started_the_previous_september() {
        assert_eq!(
            TimeWindow::Semester.start(&utc(2026, 1, 1, 0)),
            Some(utc(2025, 9, 1, 0))
        );
        assert_eq!(
            TimeWindow::Semester.start(&utc(2026, 1, 31, 23)),
            Some(utc(2025, 9, 1, 0))
        );
    }

    #[test]
    fn semester_spring_months_start_in_february() {
        assert_eq!(
            TimeWindow::Semester.start(&utc(2026, 2, 1, 0)),
            Some(utc(2026, 2, 1, 0))
        );
        assert_eq!(
            TimeWindow::Semester.start(&utc(2026, 8, 31, 23)),
            Some(utc(2026, 2, 1, 0))
        );
    }

    #[test]
    fn filter_all_is_identity_and_borrows() {
        let ratings = vec![
            rating_at(1, utc(2001, 1, 1, 0)),
            rating_at(2, utc(2030, 1, 1, 0)),
        ];
        let filtered = filter_by_window(&ratings, TimeWindow::All, &utc(2025, 1, 1, 0));
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(filtered.as_ref(), ratings.as_slice());
    }

    #[test]
    fn filter_today_keeps_exactly_the_current_day() {
        let now = utc(2025, 6, 10, 12);
        let ratings = vec![
            rating_at(1, utc(2025, 6, 9, 23)),
            rating_at(2, utc(2025, 6, 10, 0)),
            rating_at(3, utc(2025, 6, 10, 11)),
            rating_at(4, utc(2025, 5, 10, 12)),
        ];
        let filtered = filter_by_window(&ratings, TimeWindow::Today, &now);
        let ids: Vec<_> = filtered.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![Id::Number(2), Id::Number(3)]);
    }

    #[test]
    fn filter_preserves_input_order() {
        let now = utc(2025, 6, 10, 12);
        let ratings = vec![
            rating_at(5, utc(2025, 6, 3, 0)),
            rating_at(1, utc(2024, 6, 3, 0)),
            rating_at(3, utc(2025, 6, 1, 0)),
        ];
        let filtered = filter_by_window(&ratings, TimeWindow::Month, &now);
        let ids: Vec<_> = filtered.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![Id::Number(5), Id::Number(3)]);
    }

    #[test]
    fn contains_is_inclusive_at_the_boundary() {
        let now = utc(2025, 6, 10, 12);
        assert!(TimeWindow::Year.contains(&utc(2025, 1, 1, 0), &now));
        assert!(!TimeWindow::Year.contains(&utc(2024, 12, 31, 23), &now));
        assert!(TimeWindow::All.contains(&utc(1990, 1, 1, 0), &now));
    }
}
