use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::user::show_current_user;

pub fn build_user_routers() -> Router<AppRegistry> {
    Router::new().route("/users/me", get(show_current_user))
}
