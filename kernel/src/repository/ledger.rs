use crate::model::id::{LedgerEntryId, UserId};
use crate::model::ledger::{event::Deposit, LedgerEntry};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Sum of the account's deltas. The only definition of "balance" in the
    /// system; nothing stores a balance directly.
    async fn balance(&self, user_id: UserId) -> AppResult<i64>;
    /// Operator top-up so accounts can be funded. Booking debits and refund
    /// credits are written inside their own transactions, not through this.
    async fn deposit(&self, event: Deposit, requested_by: UserId) -> AppResult<LedgerEntryId>;
    async fn entries_for_user(&self, user_id: UserId) -> AppResult<Vec<LedgerEntry>>;
}
