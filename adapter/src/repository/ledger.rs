use crate::database::{model::ledger::LedgerEntryRow, ConnectionPool};
use crate::repository::insert_activity;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::activity::{ActivityAction, ActivityRecord};
use kernel::model::id::{LedgerEntryId, UserId};
use kernel::model::ledger::{event::Deposit, LedgerEntry};
use kernel::repository::ledger::LedgerRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct LedgerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl LedgerRepository for LedgerRepositoryImpl {
    async fn balance(&self, user_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"SELECT COALESCE(SUM(delta), 0)::bigint FROM ledger_entries WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn deposit(&self, event: Deposit, requested_by: UserId) -> AppResult<LedgerEntryId> {
        if event.amount <= 0 {
            return Err(AppError::InvalidRequest(
                "a deposit must be a positive amount of credits".into(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let entry_id = LedgerEntryId::new();
        sqlx::query(
            r#"
                INSERT INTO ledger_entries (entry_id, user_id, delta, reason)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry_id)
        .bind(event.user_id)
        .bind(event.amount)
        .bind(&event.reason)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: requested_by,
                action: ActivityAction::CreditsDeposited,
                entity_id: event.user_id.raw(),
                detail: format!("amount={}, reason={}", event.amount, event.reason),
            },
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(entry_id)
    }

    async fn entries_for_user(&self, user_id: UserId) -> AppResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerEntryRow>(
            r#"
                SELECT entry_id, user_id, delta, reason, reservation_id, recorded_at
                FROM ledger_entries
                WHERE user_id = $1
                ORDER BY recorded_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(LedgerEntry::from).collect())
    }
}
