use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::ledger::{deposit, show_my_ledger};

pub fn build_ledger_routers() -> Router<AppRegistry> {
    let ledger_routers = Router::new()
        .route("/me", get(show_my_ledger))
        .route("/deposits", post(deposit));

    Router::new().nest("/ledger", ledger_routers)
}
