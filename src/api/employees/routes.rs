// Employee detail route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the employee detail endpoint
pub fn employee_routes() -> Router<AppState> {
    Router::new().route("/employee/{id}", get(handler::employee_details_handler))
}
