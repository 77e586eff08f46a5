use crate::model::id::{LedgerEntryId, ReservationId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

/// One immutable, signed credit movement. An account's balance is always
/// the sum of its deltas; balances are never stored directly.
#[derive(Debug)]
pub struct LedgerEntry {
    pub entry_id: LedgerEntryId,
    pub user_id: UserId,
    pub delta: i64,
    pub reason: String,
    pub reservation_id: Option<ReservationId>,
    pub recorded_at: DateTime<Utc>,
}
