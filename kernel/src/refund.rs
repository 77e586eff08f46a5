use chrono::Duration;

/// Refund tier for a cancellation, decided by how long remains until the
/// reservation starts at the moment of cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundTier {
    /// More than 6 hours out.
    Full,
    /// Between 1 and 6 hours out, both ends inclusive.
    Half,
    /// Less than 1 hour out (or already started).
    Forfeit,
}

impl RefundTier {
    pub fn for_remaining(remaining: Duration) -> Self {
        if remaining > Duration::hours(6) {
            RefundTier::Full
        } else if remaining >= Duration::hours(1) {
            RefundTier::Half
        } else {
            RefundTier::Forfeit
        }
    }

    pub fn percent(&self) -> u32 {
        match self {
            RefundTier::Full => 100,
            RefundTier::Half => 50,
            RefundTier::Forfeit => 0,
        }
    }

    /// `floor(credits * pct)`; integer division does the flooring.
    pub fn apply(&self, credits: i64) -> i64 {
        credits * self.percent() as i64 / 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_hours_out_refunds_everything() {
        let tier = RefundTier::for_remaining(Duration::hours(7));
        assert_eq!(tier, RefundTier::Full);
        assert_eq!(tier.apply(100), 100);
    }

    #[test]
    fn three_hours_out_refunds_half() {
        let tier = RefundTier::for_remaining(Duration::hours(3));
        assert_eq!(tier, RefundTier::Half);
        assert_eq!(tier.apply(100), 50);
    }

    #[test]
    fn thirty_minutes_out_refunds_nothing() {
        let tier = RefundTier::for_remaining(Duration::minutes(30));
        assert_eq!(tier, RefundTier::Forfeit);
        assert_eq!(tier.apply(100), 0);
    }

    #[test]
    fn exactly_six_hours_is_still_the_half_tier() {
        assert_eq!(
            RefundTier::for_remaining(Duration::hours(6)),
            RefundTier::Half
        );
        assert_eq!(
            RefundTier::for_remaining(Duration::hours(6) + Duration::seconds(1)),
            RefundTier::Full
        );
    }

    #[test]
    fn exactly_one_hour_is_still_the_half_tier() {
        assert_eq!(
            RefundTier::for_remaining(Duration::hours(1)),
            RefundTier::Half
        );
        assert_eq!(
            RefundTier::for_remaining(Duration::minutes(59)),
            RefundTier::Forfeit
        );
    }

    #[test]
    fn odd_amounts_floor_on_the_half_tier() {
        assert_eq!(RefundTier::Half.apply(99), 49);
        assert_eq!(RefundTier::Half.apply(1), 0);
    }

    #[test]
    fn already_started_reservations_forfeit() {
        assert_eq!(
            RefundTier::for_remaining(Duration::hours(-2)),
            RefundTier::Forfeit
        );
    }
}
