use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ReservationId, UnitId, UserId},
    reservation::{PricingSnapshot, Reservation, ReservationStatus, ReservationUnit},
};
use kernel::pricing::PricingMode;

// One reservation joined with its unit's label.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub unit_id: UnitId,
    pub reserved_by: UserId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub credits_charged: i64,
    pub pricing_mode: PricingMode,
    pub hourly_rate: i64,
    pub day_price: i64,
    pub billable_days: i64,
    pub duration_minutes: i64,
    pub reserved_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub label: String,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            unit_id,
            reserved_by,
            starts_at,
            ends_at,
            status,
            credits_charged,
            pricing_mode,
            hourly_rate,
            day_price,
            billable_days,
            duration_minutes,
            reserved_at,
            canceled_at,
            label,
        } = value;
        Reservation {
            reservation_id,
            reserved_by,
            starts_at,
            ends_at,
            status,
            credits_charged,
            pricing: PricingSnapshot {
                mode: pricing_mode,
                hourly_rate,
                day_price,
                billable_days,
                duration_minutes,
            },
            reserved_at,
            canceled_at,
            unit: ReservationUnit { unit_id, label },
        }
    }
}

// The columns the cancellation transaction locks and inspects before it
// decides the refund.
#[derive(sqlx::FromRow)]
pub struct CancelTargetRow {
    pub reserved_by: UserId,
    pub starts_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub credits_charged: i64,
}
