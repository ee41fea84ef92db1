// Employee detail page handler

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::{info, instrument};

use crate::api::error::AppError;
use crate::config::state::AppState;
use crate::models::employee::Employee;

/// Template for a single employee's detail page.
#[derive(Template, WebTemplate)]
#[template(path = "employee_details.html")]
pub struct EmployeeDetailsTemplate {
    pub employee: Employee,
}

/// Renders the detail page for one employee, or the 404 page when the id
/// matches no record.
///
/// # Endpoint
///
/// `GET /employee/{id}`
#[instrument(name = "employee_details", skip(state))]
pub async fn employee_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<EmployeeDetailsTemplate, AppError> {
    // A non-numeric segment matches no record, same 404 as an unknown id.
    let id: i64 = id.parse().map_err(|_| AppError::NotFound)?;

    let employee: Employee = state
        .database
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    info!("Rendering details for employee {}", employee.id);
    Ok(EmployeeDetailsTemplate { employee })
}
