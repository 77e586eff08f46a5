use crate::{
    extractor::AuthorizedUser,
    model::{
        availability::{AvailabilityQuery, AvailabilityResponse},
        pricing::{QuoteQuery, QuoteResponse},
        unit::ModelResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::id::ModelId;
use kernel::{pricing, window::BookingWindow};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Advisory availability. Validation errors come back as-is rather than the
/// window being silently adjusted; the authoritative answer is still the
/// booking transaction itself.
pub async fn show_availability(
    _user: AuthorizedUser,
    Path(model_id): Path<ModelId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    let window = BookingWindow::for_query(query.start, query.end)?;

    let unit_repository = registry.unit_repository();
    let available_unit_ids = unit_repository
        .find_available(model_id, &window, query.color.as_deref())
        .await?;
    let total_units = unit_repository
        .count_for_model(model_id, query.color.as_deref())
        .await?;

    Ok(Json(AvailabilityResponse {
        available_count: available_unit_ids.len(),
        available_unit_ids,
        total_units,
    }))
}

pub async fn show_model(
    _user: AuthorizedUser,
    Path(model_id): Path<ModelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ModelResponse>> {
    registry
        .unit_repository()
        .find_model(model_id)
        .await?
        .map(ModelResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound(format!("model {model_id} was not found")))
}

/// Pre-booking estimate. Calls the same pricing function the booking
/// transaction charges with.
pub async fn quote_preview(
    _user: AuthorizedUser,
    Query(query): Query<QuoteQuery>,
) -> AppResult<Json<QuoteResponse>> {
    query.validate(&())?;

    let quote = pricing::quote(query.duration_minutes, query.hourly_rate);
    Ok(Json(QuoteResponse::from(quote)))
}
