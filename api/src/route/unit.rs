use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::create_booking;
use crate::handler::unit::{
    create_blackout, deactivate_unit, delete_blackout, register_unit, show_blackouts, show_unit,
};

pub fn build_unit_routers() -> Router<AppRegistry> {
    let unit_routers = Router::new()
        .route("/", post(register_unit))
        .route("/:unit_id", get(show_unit).delete(deactivate_unit))
        .route("/:unit_id/blackouts", post(create_blackout))
        .route("/:unit_id/blackouts", get(show_blackouts))
        .route("/:unit_id/blackouts/:blackout_id", delete(delete_blackout))
        .route("/:unit_id/bookings", post(create_booking));

    Router::new().nest("/units", unit_routers)
}
