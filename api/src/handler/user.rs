use crate::{extractor::AuthorizedUser, model::user::UserResponse};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_current_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_current_user(user.id())
        .await?
        .map(UserResponse::from)
        .map(Json)
        .ok_or(AppError::Unauthorized)
}
