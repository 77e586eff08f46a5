use crate::database::{
    model::reservation::{CancelTargetRow, ReservationRow},
    model::unit::UnitRateRow,
    ConnectionPool,
};
use crate::repository::insert_activity;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::activity::{ActivityAction, ActivityRecord};
use kernel::model::id::{ReservationId, UserId};
use kernel::model::reservation::{
    event::{BookingReceipt, CancelBooking, CancelReceipt, CreateBooking},
    Reservation, ReservationStatus,
};
use kernel::pricing;
use kernel::refund::RefundTier;
use kernel::repository::reservation::BookingRepository;
use shared::error::{AppError, AppResult};

// Postgres SQLSTATE codes the booking transaction must tell apart.
const EXCLUSION_VIOLATION: &str = "23P01";
const SERIALIZATION_FAILURE: &str = "40001";

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingReceipt> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        // Unit resolution: the unit must exist and be active, and its model
        // is joined in so the rate can be resolved in the same read.
        let unit = sqlx::query_as::<_, UnitRateRow>(
            r#"
                SELECT u.unit_id, u.is_active, u.hourly_rate_override, m.suggested_hourly_rate
                FROM rentable_units AS u
                INNER JOIN vehicle_models AS m ON u.model_id = m.model_id
                WHERE u.unit_id = $1
            "#,
        )
        .bind(event.unit_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let unit = match unit {
            None => {
                return Err(AppError::UnitUnavailable(format!(
                    "unit {} was not found",
                    event.unit_id
                )))
            }
            Some(u) => u,
        };

        if !unit.is_active {
            return Err(AppError::UnitUnavailable(format!(
                "unit {} is not offered for booking",
                event.unit_id
            )));
        }

        // Blackout veto. Best-effort early check; the exclusion constraint
        // below only guards against other confirmed reservations.
        let blackout = sqlx::query_scalar::<_, uuid::Uuid>(
            r#"
                SELECT blackout_id
                FROM blackout_windows
                WHERE unit_id = $1
                  AND starts_at < $3
                  AND ends_at > $2
                LIMIT 1
            "#,
        )
        .bind(event.unit_id)
        .bind(event.window.starts_at())
        .bind(event.window.ends_at())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if blackout.is_some() {
            return Err(AppError::UnitUnavailable(format!(
                "unit {} is blacked out during the requested window",
                event.unit_id
            )));
        }

        // Rate resolution: per-unit override wins, the model's suggestion
        // is the fallback, and a missing or non-positive rate is a
        // configuration error rather than a bookable state.
        let hourly_rate = unit
            .hourly_rate_override
            .or(unit.suggested_hourly_rate)
            .filter(|rate| *rate > 0)
            .ok_or_else(|| {
                AppError::NoRateConfigured(format!(
                    "unit {} has no usable hourly rate",
                    event.unit_id
                ))
            })?;

        let quote = pricing::quote(event.window.duration_minutes(), hourly_rate);

        // Balance check against the same snapshot the debit will be written
        // under.
        let balance = sqlx::query_scalar::<_, i64>(
            r#"SELECT COALESCE(SUM(delta), 0)::bigint FROM ledger_entries WHERE user_id = $1"#,
        )
        .bind(event.reserved_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if balance < quote.total_credits {
            return Err(AppError::InsufficientBalance {
                required: quote.total_credits,
                balance,
            });
        }

        // Atomic commit: reservation under the no-overlap exclusion
        // constraint, the ledger debit, and the activity record. A racing
        // booking for an intersecting interval loses here and nowhere else.
        let reservation_id = ReservationId::new();
        sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, unit_id, reserved_by, starts_at, ends_at, status,
                 credits_charged, pricing_mode, hourly_rate, day_price,
                 billable_days, duration_minutes, reserved_at)
                VALUES ($1, $2, $3, $4, $5, 'confirmed', $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(reservation_id)
        .bind(event.unit_id)
        .bind(event.reserved_by)
        .bind(event.window.starts_at())
        .bind(event.window.ends_at())
        .bind(quote.total_credits)
        .bind(quote.mode)
        .bind(quote.hourly_rate)
        .bind(quote.day_price)
        .bind(quote.billable_days)
        .bind(quote.duration_minutes)
        .bind(event.requested_at)
        .execute(&mut *tx)
        .await
        .map_err(map_booking_conflict)?;

        sqlx::query(
            r#"
                INSERT INTO ledger_entries (user_id, delta, reason, reservation_id)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(event.reserved_by)
        .bind(-quote.total_credits)
        .bind(format!("charge for reservation on unit {}", event.unit_id))
        .bind(reservation_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: event.reserved_by,
                action: ActivityAction::BookingCreated,
                entity_id: reservation_id.raw(),
                detail: format!(
                    "unit={}, window=[{}, {}), mode={:?}, credits={}",
                    event.unit_id,
                    event.window.starts_at(),
                    event.window.ends_at(),
                    quote.mode,
                    quote.total_credits
                ),
            },
        )
        .await?;

        // Serialization failures can also surface at commit.
        tx.commit().await.map_err(map_booking_conflict)?;

        Ok(BookingReceipt {
            reservation_id,
            credits_charged: quote.total_credits,
            balance_after: balance - quote.total_credits,
            pricing: quote.snapshot(),
        })
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<CancelReceipt> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        let target = sqlx::query_as::<_, CancelTargetRow>(
            r#"
                SELECT reserved_by, starts_at, status, credits_charged
                FROM reservations
                WHERE reservation_id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(target) = target else {
            return Err(AppError::EntityNotFound(format!(
                "reservation {} was not found",
                event.reservation_id
            )));
        };

        if !event.canceled_by_admin && target.reserved_by != event.canceled_by {
            return Err(AppError::Forbidden(
                "only the reserving customer or an administrator may cancel".into(),
            ));
        }

        // Idempotence: re-canceling is a success with no refund and no
        // further writes.
        if target.status == ReservationStatus::Canceled {
            return Ok(CancelReceipt {
                status: ReservationStatus::Canceled,
                refund_credits: 0,
                refund_pct: 0,
            });
        }

        let remaining = target.starts_at - event.canceled_at;
        let tier = RefundTier::for_remaining(remaining);
        let refund_credits = tier.apply(target.credits_charged);

        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET status = 'canceled', canceled_at = $2
                WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.canceled_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation has been canceled".into(),
            ));
        }

        if refund_credits > 0 {
            sqlx::query(
                r#"
                    INSERT INTO ledger_entries (user_id, delta, reason, reservation_id)
                    VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(target.reserved_by)
            .bind(refund_credits)
            .bind(format!("{}% cancellation refund", tier.percent()))
            .bind(event.reservation_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        insert_activity(
            &mut *tx,
            &ActivityRecord {
                actor: event.canceled_by,
                action: ActivityAction::BookingCanceled,
                entity_id: event.reservation_id.raw(),
                detail: format!(
                    "refund_pct={}, minutes_until_start={}, canceled_by={}",
                    tier.percent(),
                    remaining.num_minutes(),
                    if event.canceled_by_admin {
                        "admin"
                    } else {
                        "owner"
                    }
                ),
            },
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(CancelReceipt {
            status: ReservationStatus::Canceled,
            refund_credits,
            refund_pct: tier.percent(),
        })
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    r.reservation_id, r.unit_id, r.reserved_by, r.starts_at, r.ends_at,
                    r.status, r.credits_charged, r.pricing_mode, r.hourly_rate,
                    r.day_price, r.billable_days, r.duration_minutes, r.reserved_at,
                    r.canceled_at, u.label
                FROM reservations AS r
                INNER JOIN rentable_units AS u ON r.unit_id = u.unit_id
                WHERE r.reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Reservation::from))
    }

    async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    r.reservation_id, r.unit_id, r.reserved_by, r.starts_at, r.ends_at,
                    r.status, r.credits_charged, r.pricing_mode, r.hourly_rate,
                    r.day_price, r.billable_days, r.duration_minutes, r.reserved_at,
                    r.canceled_at, u.label
                FROM reservations AS r
                INNER JOIN rentable_units AS u ON r.unit_id = u.unit_id
                WHERE r.reserved_by = $1
                ORDER BY r.starts_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

/// Maps the two storage-level race outcomes to their retryable errors:
/// losing the slot to a concurrent booking (exclusion violation) and a
/// serialization abort unrelated to the slot itself.
fn map_booking_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            Some(EXCLUSION_VIOLATION) => return AppError::SlotAlreadyBooked,
            Some(SERIALIZATION_FAILURE) => return AppError::TransientStorage,
            _ => {}
        }
    }
    AppError::SpecificOperationError(e)
}
