use crate::model::blackout::{
    event::{CreateBlackout, DeleteBlackout},
    BlackoutWindow,
};
use crate::model::id::{BlackoutId, UnitId, UserId};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BlackoutRepository: Send + Sync {
    async fn create(&self, event: CreateBlackout, requested_by: UserId) -> AppResult<BlackoutId>;
    async fn delete(&self, event: DeleteBlackout, requested_by: UserId) -> AppResult<()>;
    async fn find_for_unit(&self, unit_id: UnitId) -> AppResult<Vec<BlackoutWindow>>;
}
