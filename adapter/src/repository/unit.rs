use crate::database::{
    model::unit::{ModelRow, UnitRow},
    ConnectionPool,
};
use crate::repository::insert_activity;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::activity::{ActivityAction, ActivityRecord};
use kernel::model::id::{ModelId, UnitId, UserId};
use kernel::model::unit::{event::CreateUnit, RentableUnit};
use kernel::model::vehicle::VehicleModel;
use kernel::repository::unit::UnitRepository;
use kernel::window::BookingWindow;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UnitRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UnitRepository for UnitRepositoryImpl {
    async fn create(&self, event: CreateUnit, registered_by: UserId) -> AppResult<UnitId> {
        let mut tx = self.db.begin().await?;

        let unit_id = UnitId::new();
        sqlx::query(
            r#"
                INSERT INTO rentable_units
                (unit_id, business_id, model_id, label, color, hourly_rate_override)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(unit_id)
        .bind(event.business_id)
        .bind(event.model_id)
        .bind(&event.label)
        .bind(&event.color)
        .bind(event.hourly_rate_override)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: registered_by,
                action: ActivityAction::UnitRegistered,
                entity_id: unit_id.raw(),
                detail: format!("label={}, model={}", event.label, event.model_id),
            },
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(unit_id)
    }

    async fn find_by_id(&self, unit_id: UnitId) -> AppResult<Option<RentableUnit>> {
        let row = sqlx::query_as::<_, UnitRow>(
            r#"
                SELECT unit_id, business_id, model_id, label, color,
                       hourly_rate_override, is_active
                FROM rentable_units
                WHERE unit_id = $1
            "#,
        )
        .bind(unit_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(RentableUnit::from))
    }

    async fn find_model(&self, model_id: ModelId) -> AppResult<Option<VehicleModel>> {
        let row = sqlx::query_as::<_, ModelRow>(
            r#"
                SELECT model_id, model_name, category, suggested_hourly_rate
                FROM vehicle_models
                WHERE model_id = $1
            "#,
        )
        .bind(model_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(VehicleModel::from))
    }

    async fn deactivate(&self, unit_id: UnitId, requested_by: UserId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query(
            r#"
                UPDATE rentable_units
                SET is_active = FALSE
                WHERE unit_id = $1
            "#,
        )
        .bind(unit_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "unit {unit_id} was not found"
            )));
        }

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: requested_by,
                action: ActivityAction::UnitDeactivated,
                entity_id: unit_id.raw(),
                detail: String::new(),
            },
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    // Advisory only: a unit listed here can still lose the race to a
    // concurrent booking. The exclusion constraint has the final word.
    async fn find_available(
        &self,
        model_id: ModelId,
        window: &BookingWindow,
        color: Option<&str>,
    ) -> AppResult<Vec<UnitId>> {
        let rows = sqlx::query_scalar::<_, UnitId>(
            r#"
                SELECT u.unit_id
                FROM rentable_units AS u
                WHERE u.model_id = $1
                  AND u.is_active
                  AND ($2::text IS NULL OR u.color = $2)
                  AND NOT EXISTS (
                      SELECT 1 FROM reservations AS r
                      WHERE r.unit_id = u.unit_id
                        AND r.status = 'confirmed'
                        AND r.starts_at < $4
                        AND r.ends_at > $3
                  )
                  AND NOT EXISTS (
                      SELECT 1 FROM blackout_windows AS b
                      WHERE b.unit_id = u.unit_id
                        AND b.starts_at < $4
                        AND b.ends_at > $3
                  )
                ORDER BY u.label ASC
            "#,
        )
        .bind(model_id)
        .bind(color)
        .bind(window.starts_at())
        .bind(window.ends_at())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows)
    }

    async fn count_for_model(&self, model_id: ModelId, color: Option<&str>) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*)
                FROM rentable_units
                WHERE model_id = $1
                  AND is_active
                  AND ($2::text IS NULL OR color = $2)
            "#,
        )
        .bind(model_id)
        .bind(color)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::reservation::BookingRepositoryImpl;
    use crate::repository::test_support::*;
    use chrono::Utc;
    use kernel::model::reservation::event::CreateBooking;
    use kernel::repository::reservation::BookingRepository;

    #[sqlx::test(migrations = "../migrations")]
    async fn availability_excludes_booked_blacked_out_and_inactive_units(pool: sqlx::PgPool) {
        let db = ConnectionPool::new(pool.clone());
        let units = UnitRepositoryImpl::new(db.clone());
        let bookings = BookingRepositoryImpl::new(db);

        let customer = insert_customer(&pool, "alice").await;
        fund(&pool, customer, 1000).await;
        let model = insert_model(&pool, Some(20)).await;

        let booked = insert_unit(&pool, model, "AV-001", "red", None).await;
        let blacked_out = insert_unit(&pool, model, "AV-002", "red", None).await;
        let inactive = insert_unit(&pool, model, "AV-003", "red", None).await;
        let free = insert_unit(&pool, model, "AV-004", "red", None).await;

        let window = future_window(10, 0, 12, 0);
        bookings
            .create(CreateBooking::new(booked, customer, window, Utc::now()))
            .await
            .unwrap();
        insert_blackout(&pool, blacked_out, window.starts_at(), window.ends_at()).await;
        deactivate_unit(&pool, inactive).await;

        let available = units.find_available(model, &window, None).await.unwrap();
        assert_eq!(available, vec![free]);

        // The booked unit reappears for a window that only touches its
        // reservation.
        let later = future_window(12, 0, 14, 0);
        let available = units.find_available(model, &later, None).await.unwrap();
        assert!(available.contains(&booked));
        assert!(!available.contains(&inactive));
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn availability_honors_the_color_filter(pool: sqlx::PgPool) {
        let units = UnitRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let model = insert_model(&pool, Some(20)).await;
        let red = insert_unit(&pool, model, "AV-005", "red", None).await;
        let blue = insert_unit(&pool, model, "AV-006", "blue", None).await;

        let window = future_window(10, 0, 12, 0);
        let available = units
            .find_available(model, &window, Some("blue"))
            .await
            .unwrap();
        assert_eq!(available, vec![blue]);

        let available = units.find_available(model, &window, None).await.unwrap();
        assert_eq!(available.len(), 2);
        assert!(available.contains(&red));

        assert_eq!(units.count_for_model(model, None).await.unwrap(), 2);
        assert_eq!(units.count_for_model(model, Some("red")).await.unwrap(), 1);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn looks_up_models_and_units_by_id(pool: sqlx::PgPool) {
        let units = UnitRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let model = insert_model(&pool, Some(20)).await;
        let unit = insert_unit(&pool, model, "AV-007", "green", Some(35)).await;

        let found = units.find_model(model).await.unwrap().unwrap();
        assert_eq!(found.suggested_hourly_rate, Some(20));

        let found = units.find_by_id(unit).await.unwrap().unwrap();
        assert_eq!(found.model_id, model);
        assert_eq!(found.color, "green");
        assert_eq!(found.hourly_rate_override, Some(35));
        assert!(found.is_active);

        assert!(units.find_model(ModelId::new()).await.unwrap().is_none());
        assert!(units.find_by_id(UnitId::new()).await.unwrap().is_none());
    }
}
