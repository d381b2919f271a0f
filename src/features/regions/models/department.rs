use serde::Serialize;
use sqlx::FromRow;

/// Top level of the geographic hierarchy
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
}
