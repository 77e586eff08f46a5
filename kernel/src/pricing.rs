use crate::model::reservation::PricingSnapshot;
use serde::{Deserialize, Serialize};

/// Durations at or below this bill linearly per hour; everything longer
/// falls into day/week-cap billing.
pub const HOURLY_CUTOFF_MINUTES: i64 = 300;

/// A calendar day never costs more than this many hours of hourly billing.
pub const DAY_CAP_HOURS: i64 = 5;

/// A full 7-day block is billed as 5 day units (two days free).
pub const BILLABLE_DAYS_PER_WEEK: i64 = 5;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "pricing_mode", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    Hourly,
    DayCap,
    WeekCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub mode: PricingMode,
    pub total_credits: i64,
    pub hourly_rate: i64,
    pub day_price: i64,
    pub billable_days: i64,
    pub duration_minutes: i64,
}

impl Quote {
    pub fn snapshot(&self) -> PricingSnapshot {
        PricingSnapshot {
            mode: self.mode,
            hourly_rate: self.hourly_rate,
            day_price: self.day_price,
            billable_days: self.billable_days,
            duration_minutes: self.duration_minutes,
        }
    }
}

/// Prices a rental of `duration_minutes` at `hourly_rate` credits per hour.
///
/// Up to 5 hours the charge is hourly with partial hours rounded up. Beyond
/// that, each billable day costs a flat `hourly_rate * 5`, a started day
/// counts in full, a 7-day block is billed as 5 day units, and a partial
/// week is capped at 5 billable days.
///
/// This is the single pricing implementation: the booking transaction and
/// the client-facing preview both call it, so an estimate shown before
/// booking can never disagree with the amount charged.
///
/// Callers must have validated both arguments as strictly positive.
pub fn quote(duration_minutes: i64, hourly_rate: i64) -> Quote {
    debug_assert!(duration_minutes > 0);
    debug_assert!(hourly_rate > 0);

    let day_price = hourly_rate * DAY_CAP_HOURS;

    if duration_minutes <= HOURLY_CUTOFF_MINUTES {
        // ceil(rate * minutes / 60), all integer.
        let total_credits =
            (hourly_rate * duration_minutes + MINUTES_PER_HOUR - 1) / MINUTES_PER_HOUR;
        return Quote {
            mode: PricingMode::Hourly,
            total_credits,
            hourly_rate,
            day_price,
            billable_days: 0,
            duration_minutes,
        };
    }

    let total_days = (duration_minutes + MINUTES_PER_DAY - 1) / MINUTES_PER_DAY;
    let weeks = total_days / DAYS_PER_WEEK;
    let remainder_days = total_days % DAYS_PER_WEEK;
    let remainder_billable = remainder_days.min(BILLABLE_DAYS_PER_WEEK);
    let billable_days = weeks * BILLABLE_DAYS_PER_WEEK + remainder_billable;

    let mode = if total_days == 1 {
        PricingMode::DayCap
    } else {
        PricingMode::WeekCap
    };

    Quote {
        mode,
        total_credits: billable_days * day_price,
        hourly_rate,
        day_price,
        billable_days,
        duration_minutes,
    }
}

/// Recomputes the total a stored snapshot stands for. Used to audit that a
/// reservation's `credits_charged` still matches its captured terms.
pub fn recompute(snapshot: &PricingSnapshot) -> i64 {
    match snapshot.mode {
        PricingMode::Hourly => {
            (snapshot.hourly_rate * snapshot.duration_minutes + MINUTES_PER_HOUR - 1)
                / MINUTES_PER_HOUR
        }
        PricingMode::DayCap | PricingMode::WeekCap => snapshot.billable_days * snapshot.day_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: i64 = 20;

    #[test]
    fn one_hour_bills_one_hourly_unit() {
        let q = quote(60, RATE);
        assert_eq!(q.mode, PricingMode::Hourly);
        assert_eq!(q.total_credits, 20);
    }

    #[test]
    fn partial_hours_round_up() {
        // 2.5h at 20/h -> ceil(50) = 50
        let q = quote(150, RATE);
        assert_eq!(q.mode, PricingMode::Hourly);
        assert_eq!(q.total_credits, 50);

        // 90min at 19/h -> ceil(28.5) = 29
        let q = quote(90, 19);
        assert_eq!(q.total_credits, 29);
    }

    #[test]
    fn five_hours_is_the_last_hourly_duration() {
        let q = quote(300, RATE);
        assert_eq!(q.mode, PricingMode::Hourly);
        assert_eq!(q.total_credits, 100);
    }

    #[test]
    fn six_hours_flips_to_day_cap() {
        let q = quote(360, RATE);
        assert_eq!(q.mode, PricingMode::DayCap);
        assert_eq!(q.billable_days, 1);
        assert_eq!(q.day_price, 100);
        assert_eq!(q.total_credits, 100);
    }

    #[test]
    fn one_full_day_costs_one_day_unit() {
        let q = quote(1440, RATE);
        assert_eq!(q.mode, PricingMode::DayCap);
        assert_eq!(q.total_credits, 100);
    }

    #[test]
    fn day_and_a_half_starts_a_second_day() {
        let q = quote(2160, RATE);
        assert_eq!(q.mode, PricingMode::WeekCap);
        assert_eq!(q.billable_days, 2);
        assert_eq!(q.total_credits, 200);
    }

    #[test]
    fn six_day_partial_week_is_capped_at_five() {
        let q = quote(6 * 1440, RATE);
        assert_eq!(q.billable_days, 5);
        assert_eq!(q.total_credits, 500);
    }

    #[test]
    fn seven_days_bill_as_five_day_units() {
        let q = quote(10080, RATE);
        assert_eq!(q.mode, PricingMode::WeekCap);
        assert_eq!(q.billable_days, 5);
        assert_eq!(q.total_credits, 500);
    }

    #[test]
    fn fourteen_days_bill_as_ten_day_units() {
        let q = quote(20160, RATE);
        assert_eq!(q.mode, PricingMode::WeekCap);
        assert_eq!(q.billable_days, 10);
        assert_eq!(q.total_credits, 1000);
    }

    #[test]
    fn price_is_monotonic_within_each_mode() {
        let mut last_hourly = 0;
        for minutes in (30..=HOURLY_CUTOFF_MINUTES).step_by(30) {
            let q = quote(minutes, RATE);
            assert!(q.total_credits >= last_hourly, "hourly dipped at {minutes}");
            last_hourly = q.total_credits;
        }

        let mut last_capped = 0;
        for minutes in (330..=21 * 1440).step_by(30) {
            let q = quote(minutes, RATE);
            assert!(q.total_credits >= last_capped, "capped dipped at {minutes}");
            last_capped = q.total_credits;
        }
    }

    #[test]
    fn capped_total_never_exceeds_hourly_extrapolation() {
        for minutes in (330..=21 * 1440).step_by(30) {
            let q = quote(minutes, RATE);
            let hourly_equivalent = (RATE * minutes + 59) / 60;
            assert!(
                q.total_credits <= hourly_equivalent,
                "cap exceeded hourly billing at {minutes}"
            );
        }
    }

    #[test]
    fn discontinuity_at_the_five_hour_boundary_favors_the_renter() {
        // 4.5h hourly costs 90, while 5.5h already falls under the 100-credit
        // day price. The jump from 300 to 330 minutes is flat by design.
        assert_eq!(quote(270, RATE).total_credits, 90);
        assert_eq!(quote(300, RATE).total_credits, 100);
        assert_eq!(quote(330, RATE).total_credits, 100);
    }

    #[test]
    fn snapshot_reproduces_the_charged_total() {
        for minutes in [60, 150, 300, 360, 1440, 10080, 20160] {
            let q = quote(minutes, RATE);
            assert_eq!(recompute(&q.snapshot()), q.total_credits);
        }
    }
}
