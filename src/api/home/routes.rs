// Home page route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router for the employee list home page
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(handler::home_handler))
}
