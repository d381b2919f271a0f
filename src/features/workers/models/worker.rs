use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a worker record
#[derive(Debug, Clone, FromRow)]
pub struct Worker {
    pub id: i32,
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub sex: String,
    pub department_id: i32,
    pub province_id: i32,
    pub district_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read-only projection of a worker joined to its geographic ancestor names.
/// Built by the list and detail queries, never persisted.
#[derive(Debug, Clone, FromRow)]
pub struct WorkerSummary {
    pub id: i32,
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub sex: String,
    pub department: String,
    pub province: String,
    pub district: String,
}
