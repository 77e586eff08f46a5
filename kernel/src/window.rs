use chrono::{DateTime, Timelike, Utc};
use shared::error::{AppError, AppResult};

pub const SLOT_MINUTES: u32 = 30;
pub const MIN_DURATION_MINUTES: i64 = 60;

/// A validated half-open interval `[starts_at, ends_at)` on the 30-minute
/// grid, at least 60 minutes long. Constructing one is the only way temporal
/// policy is enforced, so the availability query and the booking transaction
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl BookingWindow {
    /// Window for an actual booking: everything `for_query` checks, plus the
    /// start must lie strictly in the future.
    pub fn for_booking(
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let window = Self::for_query(starts_at, ends_at)?;
        if starts_at <= now {
            return Err(AppError::InvalidRequest(
                "the reservation must start in the future".into(),
            ));
        }
        Ok(window)
    }

    /// Window for an advisory availability query; past windows are allowed.
    pub fn for_query(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> AppResult<Self> {
        if ends_at <= starts_at {
            return Err(AppError::InvalidRequest(
                "the end of the window must come after its start".into(),
            ));
        }
        ensure_aligned(starts_at, "start")?;
        ensure_aligned(ends_at, "end")?;

        // Both endpoints sit on the 30-minute grid, so the duration is a
        // multiple of 30 by construction; only the minimum needs checking.
        let duration_minutes = (ends_at - starts_at).num_minutes();
        if duration_minutes < MIN_DURATION_MINUTES {
            return Err(AppError::InvalidRequest(format!(
                "a reservation must cover at least {MIN_DURATION_MINUTES} minutes"
            )));
        }

        Ok(Self { starts_at, ends_at })
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.ends_at - self.starts_at).num_minutes()
    }

    /// Half-open intersection test; touching endpoints do not overlap.
    pub fn overlaps(&self, other_start: DateTime<Utc>, other_end: DateTime<Utc>) -> bool {
        other_start < self.ends_at && other_end > self.starts_at
    }
}

fn ensure_aligned(ts: DateTime<Utc>, which: &str) -> AppResult<()> {
    if ts.second() != 0 || ts.nanosecond() != 0 || ts.minute() % SLOT_MINUTES != 0 {
        return Err(AppError::InvalidRequest(format!(
            "{which} must be aligned to a {SLOT_MINUTES}-minute boundary"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, h, m, 0).unwrap()
    }

    #[test]
    fn accepts_an_aligned_hour_long_window() {
        let w = BookingWindow::for_query(ts(10, 0), ts(11, 30)).unwrap();
        assert_eq!(w.duration_minutes(), 90);
    }

    #[test]
    fn rejects_end_before_start() {
        assert!(BookingWindow::for_query(ts(11, 0), ts(10, 0)).is_err());
        assert!(BookingWindow::for_query(ts(10, 0), ts(10, 0)).is_err());
    }

    #[test]
    fn rejects_unaligned_minutes() {
        let unaligned = Utc.with_ymd_and_hms(2026, 9, 1, 10, 15, 0).unwrap();
        assert!(BookingWindow::for_query(unaligned, ts(12, 0)).is_err());
        assert!(BookingWindow::for_query(ts(10, 0), unaligned).is_err());
    }

    #[test]
    fn rejects_nonzero_seconds() {
        let with_seconds = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 30).unwrap();
        assert!(BookingWindow::for_query(with_seconds, ts(12, 0)).is_err());
    }

    #[test]
    fn rejects_windows_under_an_hour() {
        assert!(BookingWindow::for_query(ts(10, 0), ts(10, 30)).is_err());
        assert!(BookingWindow::for_query(ts(10, 0), ts(11, 0)).is_ok());
    }

    #[test]
    fn booking_requires_a_future_start() {
        let now = ts(10, 0);
        assert!(BookingWindow::for_booking(ts(10, 0), ts(11, 0), now).is_err());
        assert!(BookingWindow::for_booking(ts(9, 0), ts(11, 0), now).is_err());
        assert!(BookingWindow::for_booking(ts(10, 30), ts(11, 30), now).is_ok());
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let w = BookingWindow::for_query(ts(10, 0), ts(12, 0)).unwrap();
        assert!(!w.overlaps(ts(8, 0), ts(10, 0)));
        assert!(!w.overlaps(ts(12, 0), ts(14, 0)));
    }

    #[test]
    fn intersecting_intervals_overlap() {
        let w = BookingWindow::for_query(ts(10, 0), ts(12, 0)).unwrap();
        assert!(w.overlaps(ts(11, 30), ts(13, 0)));
        assert!(w.overlaps(ts(9, 0), ts(10, 30)));
        assert!(w.overlaps(ts(10, 30), ts(11, 0)));
        assert!(w.overlaps(ts(9, 0), ts(13, 0)));
    }
}
