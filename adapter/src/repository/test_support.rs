//! Seed helpers shared by the repository integration tests.

use chrono::{DateTime, Duration, DurationRound, TimeZone, Utc};
use kernel::model::id::{ModelId, UnitId, UserId};
use kernel::window::BookingWindow;
use sqlx::PgPool;

pub async fn insert_customer(pool: &PgPool, name: &str) -> UserId {
    insert_user(pool, name, "customer").await
}

pub async fn insert_admin(pool: &PgPool, name: &str) -> UserId {
    insert_user(pool, name, "admin").await
}

async fn insert_user(pool: &PgPool, name: &str, role: &str) -> UserId {
    let user_id = UserId::new();
    sqlx::query(
        r#"
            INSERT INTO users (user_id, user_name, email, role)
            VALUES ($1, $2, $3, $4::user_role)
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(format!("{name}@example.com"))
    .bind(role)
    .execute(pool)
    .await
    .unwrap();
    user_id
}

pub async fn fund(pool: &PgPool, user_id: UserId, amount: i64) {
    sqlx::query(
        r#"
            INSERT INTO ledger_entries (user_id, delta, reason)
            VALUES ($1, $2, 'initial grant')
        "#,
    )
    .bind(user_id)
    .bind(amount)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_model(pool: &PgPool, suggested_hourly_rate: Option<i64>) -> ModelId {
    let model_id = ModelId::new();
    sqlx::query(
        r#"
            INSERT INTO vehicle_models (model_id, model_name, category, suggested_hourly_rate)
            VALUES ($1, 'Test Model', 'compact', $2)
        "#,
    )
    .bind(model_id)
    .bind(suggested_hourly_rate)
    .execute(pool)
    .await
    .unwrap();
    model_id
}

pub async fn insert_unit(
    pool: &PgPool,
    model_id: ModelId,
    label: &str,
    color: &str,
    hourly_rate_override: Option<i64>,
) -> UnitId {
    let unit_id = UnitId::new();
    sqlx::query(
        r#"
            INSERT INTO rentable_units
            (unit_id, business_id, model_id, label, color, hourly_rate_override)
            VALUES ($1, gen_random_uuid(), $2, $3, $4, $5)
        "#,
    )
    .bind(unit_id)
    .bind(model_id)
    .bind(label)
    .bind(color)
    .bind(hourly_rate_override)
    .execute(pool)
    .await
    .unwrap();
    unit_id
}

pub async fn insert_blackout(
    pool: &PgPool,
    unit_id: UnitId,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) {
    sqlx::query(
        r#"
            INSERT INTO blackout_windows (unit_id, starts_at, ends_at, reason)
            VALUES ($1, $2, $3, 'maintenance')
        "#,
    )
    .bind(unit_id)
    .bind(starts_at)
    .bind(ends_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn deactivate_unit(pool: &PgPool, unit_id: UnitId) {
    sqlx::query("UPDATE rentable_units SET is_active = FALSE WHERE unit_id = $1")
        .bind(unit_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn ledger_sum(pool: &PgPool, user_id: UserId) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(delta), 0)::bigint FROM ledger_entries WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn reservation_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservations")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Window on a fixed, far-future day so alignment and "in the future" both
/// hold regardless of when the suite runs.
pub fn future_window(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> BookingWindow {
    let starts_at = Utc
        .with_ymd_and_hms(2030, 1, 10, start_h, start_m, 0)
        .unwrap();
    let ends_at = Utc.with_ymd_and_hms(2030, 1, 10, end_h, end_m, 0).unwrap();
    BookingWindow::for_query(starts_at, ends_at).unwrap()
}

/// Window whose start is the first 30-minute boundary after `now + lead`,
/// for exercising the refund tiers relative to the current clock.
pub fn window_starting_in(lead: Duration, duration_minutes: i64) -> BookingWindow {
    let starts_at = (Utc::now() + lead)
        .duration_trunc(Duration::minutes(30))
        .unwrap()
        + Duration::minutes(30);
    let ends_at = starts_at + Duration::minutes(duration_minutes);
    BookingWindow::for_query(starts_at, ends_at).unwrap()
}
