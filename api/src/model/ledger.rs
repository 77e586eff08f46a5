use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::id::{LedgerEntryId, ReservationId, UserId};
use kernel::model::ledger::LedgerEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(range(min = 1))]
    pub amount: i64,
    #[garde(length(min = 1))]
    pub reason: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerResponse {
    pub balance: i64,
    pub entries: Vec<LedgerEntryResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryResponse {
    pub entry_id: LedgerEntryId,
    pub delta: i64,
    pub reason: String,
    pub reservation_id: Option<ReservationId>,
    pub recorded_at: DateTime<Utc>,
}

impl From<LedgerEntry> for LedgerEntryResponse {
    fn from(value: LedgerEntry) -> Self {
        let LedgerEntry {
            entry_id,
            user_id: _,
            delta,
            reason,
            reservation_id,
            recorded_at,
        } = value;
        Self {
            entry_id,
            delta,
            reason,
            reservation_id,
            recorded_at,
        }
    }
}
