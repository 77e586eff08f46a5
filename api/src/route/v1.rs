use super::{
    booking::build_booking_routers, catalog::build_catalog_routers,
    health::build_health_check_routers, ledger::build_ledger_routers, unit::build_unit_routers,
    user::build_user_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_catalog_routers())
        .merge(build_unit_routers())
        .merge(build_booking_routers())
        .merge(build_ledger_routers())
        .merge(build_user_routers());
    Router::new().nest("/api/v1", router)
}
