//! Cost sync date-range validation and clamping

use std::fmt;

use chrono::{Duration, NaiveDate, Utc};

use crate::domain::DomainError;

/// Maximum number of days one sync may cover
pub const MAX_RANGE_DAYS: i64 = 31;

/// Cost data older than this is not requestable
pub const MAX_LOOKBACK_DAYS: i64 = 90;

/// A validated, clamped inclusive date range for cost sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Validate and clamp a requested range, relative to `today`:
    ///
    /// 1. inverted bounds are swapped,
    /// 2. the end is clamped to today,
    /// 3. a span over 31 days recomputes the start as end minus 31 days,
    /// 4. a start more than 90 days in the past is rejected.
    pub fn clamped(
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        let (mut start, mut end) = if start > end { (end, start) } else { (start, end) };

        if end > today {
            end = today;
        }

        if end - start > Duration::days(MAX_RANGE_DAYS) {
            start = end - Duration::days(MAX_RANGE_DAYS);
        }

        if start < today - Duration::days(MAX_LOOKBACK_DAYS) {
            return Err(DomainError::validation(format!(
                "start date {} is more than {} days in the past",
                start, MAX_LOOKBACK_DAYS
            )));
        }

        Ok(Self { start, end })
    }

    /// Clamp against the current UTC date
    pub fn clamped_now(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        Self::clamped(start, end, Utc::now().date_naive())
    }

    /// Default sync window: the last two weeks
    pub fn last_two_weeks() -> Self {
        let today = Utc::now().date_naive();
        Self {
            start: today - Duration::days(14),
            end: today,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, inclusive of both endpoints
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Exclusive end date, as the cost API expects
    pub fn exclusive_end(&self) -> NaiveDate {
        self.end + Duration::days(1)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: fn() -> NaiveDate = || date(2026, 8, 29);

    #[test]
    fn test_valid_range_passes_through() {
        let range = DateRange::clamped(date(2026, 8, 1), date(2026, 8, 15), TODAY()).unwrap();
        assert_eq!(range.start(), date(2026, 8, 1));
        assert_eq!(range.end(), date(2026, 8, 15));
        assert_eq!(range.num_days(), 15);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let range = DateRange::clamped(date(2026, 8, 15), date(2026, 8, 1), TODAY()).unwrap();
        assert_eq!(range.start(), date(2026, 8, 1));
        assert_eq!(range.end(), date(2026, 8, 15));
    }

    #[test]
    fn test_future_end_clamps_to_today() {
        let range = DateRange::clamped(date(2026, 8, 20), date(2026, 9, 10), TODAY()).unwrap();
        assert_eq!(range.end(), TODAY());
    }

    #[test]
    fn test_oversized_span_recomputes_start() {
        let range = DateRange::clamped(date(2026, 7, 1), date(2026, 8, 20), TODAY()).unwrap();
        assert_eq!(range.end(), date(2026, 8, 20));
        assert_eq!(range.start(), date(2026, 8, 20) - Duration::days(31));
    }

    #[test]
    fn test_stale_start_is_rejected() {
        let err = DateRange::clamped(date(2026, 4, 1), date(2026, 4, 20), TODAY());
        assert!(matches!(err, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_exclusive_end() {
        let range = DateRange::clamped(date(2026, 8, 1), date(2026, 8, 15), TODAY()).unwrap();
        assert_eq!(range.exclusive_end(), date(2026, 8, 16));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::clamped(date(2026, 8, 29), date(2026, 8, 29), TODAY()).unwrap();
        assert_eq!(range.num_days(), 1);
    }
}
