use kernel::model::activity::ActivityRecord;
use shared::error::{AppError, AppResult};

pub mod auth;
pub mod blackout;
pub mod health;
pub mod ledger;
pub mod reservation;
pub mod unit;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

/// Appends an audit row. Called inside the owning transaction so the record
/// commits or rolls back together with the change it describes.
pub(crate) async fn insert_activity(
    executor: impl sqlx::PgExecutor<'_>,
    record: &ActivityRecord,
) -> AppResult<()> {
    sqlx::query(
        r#"
            INSERT INTO activity_records (actor, action, entity_id, detail)
            VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(record.actor)
    .bind(record.action.as_str())
    .bind(record.entity_id)
    .bind(&record.detail)
    .execute(executor)
    .await
    .map_err(AppError::SpecificOperationError)?;

    Ok(())
}
