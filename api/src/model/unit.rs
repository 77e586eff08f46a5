use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::blackout::BlackoutWindow;
use kernel::model::id::{BlackoutId, BusinessId, ModelId, UnitId};
use kernel::model::unit::{event::CreateUnit, RentableUnit};
use kernel::model::vehicle::VehicleModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitRequest {
    #[garde(skip)]
    pub business_id: BusinessId,
    #[garde(skip)]
    pub model_id: ModelId,
    #[garde(length(min = 1))]
    pub label: String,
    #[garde(length(min = 1))]
    pub color: String,
    #[garde(skip)]
    pub hourly_rate_override: Option<i64>,
}

impl From<CreateUnitRequest> for CreateUnit {
    fn from(value: CreateUnitRequest) -> Self {
        let CreateUnitRequest {
            business_id,
            model_id,
            label,
            color,
            hourly_rate_override,
        } = value;
        CreateUnit {
            business_id,
            model_id,
            label,
            color,
            hourly_rate_override,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCreatedResponse {
    pub unit_id: UnitId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitResponse {
    pub unit_id: UnitId,
    pub business_id: BusinessId,
    pub model_id: ModelId,
    pub label: String,
    pub color: String,
    pub hourly_rate_override: Option<i64>,
    pub is_active: bool,
}

impl From<RentableUnit> for UnitResponse {
    fn from(value: RentableUnit) -> Self {
        let RentableUnit {
            unit_id,
            business_id,
            model_id,
            label,
            color,
            hourly_rate_override,
            is_active,
        } = value;
        Self {
            unit_id,
            business_id,
            model_id,
            label,
            color,
            hourly_rate_override,
            is_active,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResponse {
    pub model_id: ModelId,
    pub model_name: String,
    pub category: String,
    pub suggested_hourly_rate: Option<i64>,
}

impl From<VehicleModel> for ModelResponse {
    fn from(value: VehicleModel) -> Self {
        let VehicleModel {
            model_id,
            model_name,
            category,
            suggested_hourly_rate,
        } = value;
        Self {
            model_id,
            model_name,
            category,
            suggested_hourly_rate,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlackoutRequest {
    #[garde(skip)]
    pub starts_at: DateTime<Utc>,
    #[garde(skip)]
    pub ends_at: DateTime<Utc>,
    #[garde(skip)]
    pub reason: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutCreatedResponse {
    pub blackout_id: BlackoutId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutsResponse {
    pub items: Vec<BlackoutResponse>,
}

impl From<Vec<BlackoutWindow>> for BlackoutsResponse {
    fn from(value: Vec<BlackoutWindow>) -> Self {
        Self {
            items: value.into_iter().map(BlackoutResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutResponse {
    pub blackout_id: BlackoutId,
    pub unit_id: UnitId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub reason: Option<String>,
}

impl From<BlackoutWindow> for BlackoutResponse {
    fn from(value: BlackoutWindow) -> Self {
        let BlackoutWindow {
            blackout_id,
            unit_id,
            starts_at,
            ends_at,
            reason,
        } = value;
        Self {
            blackout_id,
            unit_id,
            starts_at,
            ends_at,
            reason,
        }
    }
}
