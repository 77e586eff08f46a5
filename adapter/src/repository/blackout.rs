use crate::database::{model::blackout::BlackoutRow, ConnectionPool};
use crate::repository::insert_activity;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::activity::{ActivityAction, ActivityRecord};
use kernel::model::blackout::{
    event::{CreateBlackout, DeleteBlackout},
    BlackoutWindow,
};
use kernel::model::id::{BlackoutId, UnitId, UserId};
use kernel::repository::blackout::BlackoutRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BlackoutRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BlackoutRepository for BlackoutRepositoryImpl {
    async fn create(&self, event: CreateBlackout, requested_by: UserId) -> AppResult<BlackoutId> {
        if event.ends_at <= event.starts_at {
            return Err(AppError::InvalidRequest(
                "the end of a blackout must come after its start".into(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let exists = sqlx::query_scalar::<_, UnitId>(
            r#"SELECT unit_id FROM rentable_units WHERE unit_id = $1"#,
        )
        .bind(event.unit_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "unit {} was not found",
                event.unit_id
            )));
        }

        let blackout_id = BlackoutId::new();
        sqlx::query(
            r#"
                INSERT INTO blackout_windows (blackout_id, unit_id, starts_at, ends_at, reason)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(blackout_id)
        .bind(event.unit_id)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.reason)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: requested_by,
                action: ActivityAction::BlackoutCreated,
                entity_id: blackout_id.raw(),
                detail: format!(
                    "unit={}, window=[{}, {})",
                    event.unit_id, event.starts_at, event.ends_at
                ),
            },
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(blackout_id)
    }

    async fn delete(&self, event: DeleteBlackout, requested_by: UserId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query(
            r#"DELETE FROM blackout_windows WHERE blackout_id = $1 AND unit_id = $2"#,
        )
        .bind(event.blackout_id)
        .bind(event.unit_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "blackout {} was not found on unit {}",
                event.blackout_id, event.unit_id
            )));
        }

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: requested_by,
                action: ActivityAction::BlackoutDeleted,
                entity_id: event.blackout_id.raw(),
                detail: format!("unit={}", event.unit_id),
            },
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_for_unit(&self, unit_id: UnitId) -> AppResult<Vec<BlackoutWindow>> {
        let rows = sqlx::query_as::<_, BlackoutRow>(
            r#"
                SELECT blackout_id, unit_id, starts_at, ends_at, reason
                FROM blackout_windows
                WHERE unit_id = $1
                ORDER BY starts_at ASC
            "#,
        )
        .bind(unit_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(BlackoutWindow::from).collect())
    }
}
