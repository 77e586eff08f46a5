use crate::model::auth::{AccessToken, AuthenticatedUser};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn resolve_bearer(&self, token: AccessToken) -> AppResult<Option<AuthenticatedUser>>;
}
