use chrono::{DateTime, Utc};
use kernel::model::id::UnitId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available_unit_ids: Vec<UnitId>,
    pub available_count: usize,
    pub total_units: i64,
}
