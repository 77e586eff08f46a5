use crate::model::id::ModelId;

/// Catalog entry describing a class of vehicle. Read-mostly; the booking
/// engine only consults `suggested_hourly_rate` as the fallback rate when a
/// unit carries no override.
#[derive(Debug)]
pub struct VehicleModel {
    pub model_id: ModelId,
    pub model_name: String,
    pub category: String,
    pub suggested_hourly_rate: Option<i64>,
}
