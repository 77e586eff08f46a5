use crate::model::id::{BlackoutId, UnitId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateBlackout {
    pub unit_id: UnitId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub reason: Option<String>,
}

#[derive(new, Debug)]
pub struct DeleteBlackout {
    pub blackout_id: BlackoutId,
    pub unit_id: UnitId,
}
