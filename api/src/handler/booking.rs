use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingResponse, CancelResponse, CreateBookingRequest, ReservationResponse,
        ReservationsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use kernel::model::id::{ReservationId, UnitId};
use kernel::model::reservation::event::{CancelBooking, CreateBooking};
use kernel::window::BookingWindow;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_booking(
    user: AuthorizedUser,
    Path(unit_id): Path<UnitId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_customer() {
        return Err(AppError::Forbidden(
            "only customer accounts may book units".into(),
        ));
    }

    // Temporal policy is checked here, before the transaction is entered;
    // everything after this point runs atomically in the repository.
    let window = BookingWindow::for_booking(req.start_ts, req.end_ts, Utc::now())?;

    let receipt = registry
        .booking_repository()
        .create(CreateBooking::new(unit_id, user.id(), window, Utc::now()))
        .await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(receipt))))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CancelResponse>> {
    registry
        .booking_repository()
        .cancel(CancelBooking::new(
            reservation_id,
            user.id(),
            user.is_admin(),
            Utc::now(),
        ))
        .await
        .map(CancelResponse::from)
        .map(Json)
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .booking_repository()
        .find_for_user(user.id())
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_booking(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let reservation = registry
        .booking_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("reservation {reservation_id} was not found"))
        })?;

    if reservation.reserved_by != user.id() && !user.is_admin() {
        return Err(AppError::Forbidden(
            "only the reserving customer or an administrator may view this reservation".into(),
        ));
    }

    Ok(Json(ReservationResponse::from(reservation)))
}
