use crate::model::id::{ReservationId, UnitId, UserId};
use crate::model::reservation::{PricingSnapshot, ReservationStatus};
use crate::window::BookingWindow;
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateBooking {
    pub unit_id: UnitId,
    pub reserved_by: UserId,
    pub window: BookingWindow,
    pub requested_at: DateTime<Utc>,
}

#[derive(new, Debug)]
pub struct CancelBooking {
    pub reservation_id: ReservationId,
    pub canceled_by: UserId,
    pub canceled_by_admin: bool,
    pub canceled_at: DateTime<Utc>,
}

/// What the booking transaction hands back once the commit went through.
#[derive(Debug)]
pub struct BookingReceipt {
    pub reservation_id: ReservationId,
    pub credits_charged: i64,
    pub balance_after: i64,
    pub pricing: PricingSnapshot,
}

#[derive(Debug)]
pub struct CancelReceipt {
    pub status: ReservationStatus,
    pub refund_credits: i64,
    pub refund_pct: u32,
}
