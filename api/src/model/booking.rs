use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::id::{ReservationId, UnitId, UserId};
use kernel::model::reservation::{
    event::{BookingReceipt, CancelReceipt},
    Reservation, ReservationStatus,
};
use kernel::pricing::PricingMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub start_ts: DateTime<Utc>,
    #[garde(skip)]
    pub end_ts: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub reservation_id: ReservationId,
    pub credits_charged: i64,
    pub balance_after: i64,
    pub pricing_mode: PricingMode,
    pub hourly_rate: i64,
    pub day_price: i64,
    pub billable_days: i64,
    pub duration_minutes: i64,
}

impl From<BookingReceipt> for BookingResponse {
    fn from(value: BookingReceipt) -> Self {
        let BookingReceipt {
            reservation_id,
            credits_charged,
            balance_after,
            pricing,
        } = value;
        Self {
            reservation_id,
            credits_charged,
            balance_after,
            pricing_mode: pricing.mode,
            hourly_rate: pricing.hourly_rate,
            day_price: pricing.day_price,
            billable_days: pricing.billable_days,
            duration_minutes: pricing.duration_minutes,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub status: ReservationStatus,
    pub refund_credits: i64,
    pub refund_pct: u32,
}

impl From<CancelReceipt> for CancelResponse {
    fn from(value: CancelReceipt) -> Self {
        let CancelReceipt {
            status,
            refund_credits,
            refund_pct,
        } = value;
        Self {
            status,
            refund_credits,
            refund_pct,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub unit_id: UnitId,
    pub unit_label: String,
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
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            reserved_by,
            starts_at,
            ends_at,
            status,
            credits_charged,
            pricing,
            reserved_at,
            canceled_at,
            unit,
        } = value;
        Self {
            reservation_id,
            unit_id: unit.unit_id,
            unit_label: unit.label,
            reserved_by,
            starts_at,
            ends_at,
            status,
            credits_charged,
            pricing_mode: pricing.mode,
            hourly_rate: pricing.hourly_rate,
            day_price: pricing.day_price,
            billable_days: pricing.billable_days,
            duration_minutes: pricing.duration_minutes,
            reserved_at,
            canceled_at,
        }
    }
}
