// Library root for the employee directory web application

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::database::EmployeeStore;
pub use crate::models::employee::Employee;
