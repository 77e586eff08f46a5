use crate::model::id::{ReservationId, UnitId, UserId};
use crate::pricing::PricingMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Canceled,
}

/// Pricing terms captured at creation time. Stored with the reservation so
/// historical charges stay auditable even after rates change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingSnapshot {
    pub mode: PricingMode,
    pub hourly_rate: i64,
    pub day_price: i64,
    pub billable_days: i64,
    pub duration_minutes: i64,
}

#[derive(Debug)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub credits_charged: i64,
    pub pricing: PricingSnapshot,
    pub reserved_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub unit: ReservationUnit,
}

#[derive(Debug)]
pub struct ReservationUnit {
    pub unit_id: UnitId,
    pub label: String,
}
