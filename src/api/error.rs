// Error type surfaced by page handlers

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Template for the not-found error page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

/// Errors a page handler can surface to the client.
///
/// `NotFound` renders the 404 page; everything else is logged and
/// collapses to a bare 500, leaving the details out of the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no employee matches the requested id")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NotFoundTemplate).into_response(),
            AppError::Internal(err) => {
                error!("Internal error while serving page: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
