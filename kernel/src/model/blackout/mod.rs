use crate::model::id::{BlackoutId, UnitId};
use chrono::{DateTime, Utc};

pub mod event;

/// Owner-declared unavailability interval `[starts_at, ends_at)` for one
/// unit. Consulted as a read-only veto during booking; never overlap-checked
/// against other blackouts.
#[derive(Debug)]
pub struct BlackoutWindow {
    pub blackout_id: BlackoutId,
    pub unit_id: UnitId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub reason: Option<String>,
}
