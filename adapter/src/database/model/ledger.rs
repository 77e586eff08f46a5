use chrono::{DateTime, Utc};
use kernel::model::{
    id::{LedgerEntryId, ReservationId, UserId},
    ledger::LedgerEntry,
};

#[derive(sqlx::FromRow)]
pub struct LedgerEntryRow {
    pub entry_id: LedgerEntryId,
    pub user_id: UserId,
    pub delta: i64,
    pub reason: String,
    pub reservation_id: Option<ReservationId>,
    pub recorded_at: DateTime<Utc>,
}

impl From<LedgerEntryRow> for LedgerEntry {
    fn from(value: LedgerEntryRow) -> Self {
        let LedgerEntryRow {
            entry_id,
            user_id,
            delta,
            reason,
            reservation_id,
            recorded_at,
        } = value;
        LedgerEntry {
            entry_id,
            user_id,
            delta,
            reason,
            reservation_id,
            recorded_at,
        }
    }
}
