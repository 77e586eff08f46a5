use crate::{
    extractor::AuthorizedUser,
    model::unit::{
        BlackoutCreatedResponse, BlackoutsResponse, CreateBlackoutRequest, CreateUnitRequest,
        UnitCreatedResponse, UnitResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::blackout::event::{CreateBlackout, DeleteBlackout};
use kernel::model::id::{BlackoutId, UnitId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

fn require_admin(user: &AuthorizedUser) -> AppResult<()> {
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "unit management requires the administrator capability".into(),
        ));
    }
    Ok(())
}

pub async fn register_unit(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUnitRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    req.validate(&())?;

    let unit_id = registry
        .unit_repository()
        .create(req.into(), user.id())
        .await?;

    Ok((StatusCode::CREATED, Json(UnitCreatedResponse { unit_id })))
}

pub async fn show_unit(
    _user: AuthorizedUser,
    Path(unit_id): Path<UnitId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UnitResponse>> {
    registry
        .unit_repository()
        .find_by_id(unit_id)
        .await?
        .map(UnitResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound(format!("unit {unit_id} was not found")))
}

pub async fn deactivate_unit(
    user: AuthorizedUser,
    Path(unit_id): Path<UnitId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;

    registry
        .unit_repository()
        .deactivate(unit_id, user.id())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn create_blackout(
    user: AuthorizedUser,
    Path(unit_id): Path<UnitId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBlackoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    req.validate(&())?;

    let blackout_id = registry
        .blackout_repository()
        .create(
            CreateBlackout::new(unit_id, req.starts_at, req.ends_at, req.reason),
            user.id(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlackoutCreatedResponse { blackout_id }),
    ))
}

pub async fn delete_blackout(
    user: AuthorizedUser,
    Path((unit_id, blackout_id)): Path<(UnitId, BlackoutId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;

    registry
        .blackout_repository()
        .delete(DeleteBlackout::new(blackout_id, unit_id), user.id())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_blackouts(
    _user: AuthorizedUser,
    Path(unit_id): Path<UnitId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BlackoutsResponse>> {
    registry
        .blackout_repository()
        .find_for_unit(unit_id)
        .await
        .map(BlackoutsResponse::from)
        .map(Json)
}
