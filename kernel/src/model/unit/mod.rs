use crate::model::id::{BusinessId, ModelId, UnitId};

pub mod event;

/// A physical, individually bookable vehicle owned by exactly one business.
/// Deactivation is soft: historical reservations keep referencing the unit.
#[derive(Debug)]
pub struct RentableUnit {
    pub unit_id: UnitId,
    pub business_id: BusinessId,
    pub model_id: ModelId,
    pub label: String,
    pub color: String,
    pub hourly_rate_override: Option<i64>,
    pub is_active: bool,
}
