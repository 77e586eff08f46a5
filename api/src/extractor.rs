use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::auth::{AccessToken, AuthenticatedUser};
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::AppError;
use uuid::Uuid;

/// Caller identity resolved from the `Authorization: Bearer` header.
/// Handlers take this as an argument to require authentication.
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user: AuthenticatedUser,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }

    pub fn is_customer(&self) -> bool {
        self.user.is_customer()
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, registry)
                .await
                .map_err(|_| AppError::Unauthorized)?;

        let access_token = AccessToken(
            Uuid::parse_str(bearer.token()).map_err(|_| AppError::Unauthorized)?,
        );

        let user = registry
            .auth_repository()
            .resolve_bearer(access_token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(Self { access_token, user })
    }
}
