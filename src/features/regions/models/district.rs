use serde::Serialize;
use sqlx::FromRow;

/// District, scoped to exactly one province
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct District {
    pub id: i32,
    pub name: String,
    pub province_id: i32,
}
