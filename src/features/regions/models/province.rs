use serde::Serialize;
use sqlx::FromRow;

/// Province, scoped to exactly one department
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Province {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
}
