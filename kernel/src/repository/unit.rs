use crate::model::id::{ModelId, UnitId, UserId};
use crate::model::unit::{event::CreateUnit, RentableUnit};
use crate::model::vehicle::VehicleModel;
use crate::window::BookingWindow;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UnitRepository: Send + Sync {
    async fn create(&self, event: CreateUnit, registered_by: UserId) -> AppResult<UnitId>;
    async fn find_by_id(&self, unit_id: UnitId) -> AppResult<Option<RentableUnit>>;
    async fn find_model(&self, model_id: ModelId) -> AppResult<Option<VehicleModel>>;
    async fn deactivate(&self, unit_id: UnitId, requested_by: UserId) -> AppResult<()>;
    /// Advisory availability resolution: active units of the model whose
    /// confirmed reservations and blackouts both miss the window. The
    /// authoritative check is the exclusion constraint inside the booking
    /// transaction.
    async fn find_available(
        &self,
        model_id: ModelId,
        window: &BookingWindow,
        color: Option<&str>,
    ) -> AppResult<Vec<UnitId>>;
    /// Count of active units of the model (same color filter), for the
    /// `totalUnits` figure next to an availability result.
    async fn count_for_model(&self, model_id: ModelId, color: Option<&str>) -> AppResult<i64>;
}
