// Employee domain model

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A single directory entry, mapped one-to-one from the `employees` table.
/// Written elsewhere; this application only reads it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub email: String,
    pub department: String,
    pub hired_on: NaiveDate,
}
