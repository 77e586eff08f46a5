use chrono::{DateTime, Utc};
use kernel::model::{
    blackout::BlackoutWindow,
    id::{BlackoutId, UnitId},
};

#[derive(sqlx::FromRow)]
pub struct BlackoutRow {
    pub blackout_id: BlackoutId,
    pub unit_id: UnitId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub reason: Option<String>,
}

impl From<BlackoutRow> for BlackoutWindow {
    fn from(value: BlackoutRow) -> Self {
        let BlackoutRow {
            blackout_id,
            unit_id,
            starts_at,
            ends_at,
            reason,
        } = value;
        BlackoutWindow {
            blackout_id,
            unit_id,
            starts_at,
            ends_at,
            reason,
        }
    }
}
