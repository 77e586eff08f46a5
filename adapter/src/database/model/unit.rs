use kernel::model::{
    id::{BusinessId, ModelId, UnitId},
    unit::RentableUnit,
    vehicle::VehicleModel,
};

#[derive(sqlx::FromRow)]
pub struct UnitRow {
    pub unit_id: UnitId,
    pub business_id: BusinessId,
    pub model_id: ModelId,
    pub label: String,
    pub color: String,
    pub hourly_rate_override: Option<i64>,
    pub is_active: bool,
}

impl From<UnitRow> for RentableUnit {
    fn from(value: UnitRow) -> Self {
        let UnitRow {
            unit_id,
            business_id,
            model_id,
            label,
            color,
            hourly_rate_override,
            is_active,
        } = value;
        RentableUnit {
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

#[derive(sqlx::FromRow)]
pub struct ModelRow {
    pub model_id: ModelId,
    pub model_name: String,
    pub category: String,
    pub suggested_hourly_rate: Option<i64>,
}

impl From<ModelRow> for VehicleModel {
    fn from(value: ModelRow) -> Self {
        let ModelRow {
            model_id,
            model_name,
            category,
            suggested_hourly_rate,
        } = value;
        VehicleModel {
            model_id,
            model_name,
            category,
            suggested_hourly_rate,
        }
    }
}

// Just enough of the unit + its model to resolve the rate inside the
// booking transaction.
#[derive(sqlx::FromRow)]
pub struct UnitRateRow {
    pub unit_id: UnitId,
    pub is_active: bool,
    pub hourly_rate_override: Option<i64>,
    pub suggested_hourly_rate: Option<i64>,
}
