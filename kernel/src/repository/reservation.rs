use crate::model::id::{ReservationId, UserId};
use crate::model::reservation::{
    event::{BookingReceipt, CancelBooking, CancelReceipt, CreateBooking},
    Reservation,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Runs the whole booking transaction: unit resolution, blackout veto,
    /// rate resolution, pricing, balance check, and the atomic insert of
    /// reservation + ledger debit + activity record. A concurrent booking
    /// that wins the same slot surfaces as `SlotAlreadyBooked`.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingReceipt>;
    /// Cancels a confirmed reservation with a tiered refund. Idempotent:
    /// canceling an already-canceled reservation is a zero-refund no-op.
    async fn cancel(&self, event: CancelBooking) -> AppResult<CancelReceipt>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
}
