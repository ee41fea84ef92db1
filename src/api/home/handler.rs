// Home page handler: the full employee roster

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::{info, instrument};

use crate::api::error::AppError;
use crate::config::state::AppState;
use crate::models::employee::Employee;

/// Template for the home page, listing every employee in the directory.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub employees: Vec<Employee>,
}

/// Renders the employee list.
///
/// # Endpoint
///
/// `GET /`
#[instrument(name = "home", skip(state))]
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    let employees: Vec<Employee> = state.database.fetch_all().await?;

    info!("Rendering home page with {} employees", employees.len());
    Ok(HomeTemplate { employees })
}
