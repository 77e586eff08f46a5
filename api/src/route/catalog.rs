use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::catalog::{quote_preview, show_availability, show_model};

pub fn build_catalog_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/models/:model_id", get(show_model))
        .route("/models/:model_id/availability", get(show_availability))
        .route("/pricing/quote", get(quote_preview))
}
