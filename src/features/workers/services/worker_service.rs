use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::workers::dtos::{CreateWorkerDto, UpdateWorkerDto};
use crate::features::workers::models::{Worker, WorkerSummary};

/// Outcome of a full-record update, inspected by the caller instead of
/// relying on exception-style control flow.
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Worker),
    /// The record no longer exists
    NotFound,
    /// The record still exists but the update missed it (concurrent change)
    Conflict,
}

/// Service for managing worker records
pub struct WorkerService {
    pool: PgPool,
}

impl WorkerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List workers joined to their geographic names, optionally restricted
    /// to an exact, case-sensitive sex match
    pub async fn list(&self, sex: Option<&str>) -> Result<Vec<WorkerSummary>> {
        let workers = sqlx::query_as::<_, WorkerSummary>(
            r#"
            SELECT w.id, w.document_type, w.document_number, w.name, w.sex,
                   d.name AS department, p.name AS province, t.name AS district
            FROM workers w
            JOIN departments d ON d.id = w.department_id
            JOIN provinces p ON p.id = w.province_id
            JOIN districts t ON t.id = w.district_id
            WHERE $1::text IS NULL OR w.sex = $1
            ORDER BY w.id ASC
            "#,
        )
        .bind(sex)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch workers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(workers)
    }

    /// Get a worker by id
    pub async fn get(&self, id: i32) -> Result<Worker> {
        let worker = sqlx::query_as::<_, Worker>(
            r#"
            SELECT id, document_type, document_number, name, sex,
                   department_id, province_id, district_id, created_at, updated_at
            FROM workers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch worker {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Worker with id {} not found", id)))?;

        Ok(worker)
    }

    /// Get a worker joined to its geographic names
    pub async fn get_summary(&self, id: i32) -> Result<WorkerSummary> {
        let worker = sqlx::query_as::<_, WorkerSummary>(
            r#"
            SELECT w.id, w.document_type, w.document_number, w.name, w.sex,
                   d.name AS department, p.name AS province, t.name AS district
            FROM workers w
            JOIN departments d ON d.id = w.department_id
            JOIN provinces p ON p.id = w.province_id
            JOIN districts t ON t.id = w.district_id
            WHERE w.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch worker summary {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Worker with id {} not found", id)))?;

        Ok(worker)
    }

    /// Insert a new worker; the store assigns the id.
    ///
    /// The submitted province/district are not cross-checked against the
    /// submitted department here; the store's foreign keys are the only
    /// referential guard (matches the original controller behavior).
    pub async fn create(&self, dto: CreateWorkerDto) -> Result<Worker> {
        let worker = sqlx::query_as::<_, Worker>(
            r#"
            INSERT INTO workers (
                document_type, document_number, name, sex,
                department_id, province_id, district_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, document_type, document_number, name, sex,
                      department_id, province_id, district_id, created_at, updated_at
            "#,
        )
        .bind(&dto.document_type)
        .bind(&dto.document_number)
        .bind(&dto.name)
        .bind(&dto.sex)
        .bind(dto.department_id)
        .bind(dto.province_id)
        .bind(dto.district_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert worker: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Worker created: id={}", worker.id);

        Ok(worker)
    }

    /// Replace a worker record in full.
    ///
    /// When the update touches no row, the existence check distinguishes a
    /// deleted record (NotFound) from a concurrent modification (Conflict,
    /// surfaced to the caller, never retried).
    pub async fn update(&self, dto: UpdateWorkerDto) -> Result<UpdateOutcome> {
        let updated = sqlx::query_as::<_, Worker>(
            r#"
            UPDATE workers
            SET document_type = $2, document_number = $3, name = $4, sex = $5,
                department_id = $6, province_id = $7, district_id = $8,
                updated_at = now()
            WHERE id = $1
            RETURNING id, document_type, document_number, name, sex,
                      department_id, province_id, district_id, created_at, updated_at
            "#,
        )
        .bind(dto.id)
        .bind(&dto.document_type)
        .bind(&dto.document_number)
        .bind(&dto.name)
        .bind(&dto.sex)
        .bind(dto.department_id)
        .bind(dto.province_id)
        .bind(dto.district_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update worker {}: {:?}", dto.id, e);
            AppError::Database(e)
        })?;

        match updated {
            Some(worker) => {
                tracing::info!("Worker updated: id={}", worker.id);
                Ok(UpdateOutcome::Updated(worker))
            }
            None if self.exists(dto.id).await? => Ok(UpdateOutcome::Conflict),
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    /// Delete a worker. Idempotent: deleting an absent id is a no-op.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM workers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete worker {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() > 0 {
            tracing::info!("Worker deleted: id={}", id);
        } else {
            tracing::debug!("Delete for absent worker id={}, nothing to do", id);
        }

        Ok(())
    }

    /// Check whether a worker with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workers WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check worker existence {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_geography, setup_pool, GeoFixture, DB_LOCK};

    fn create_dto(geo: &GeoFixture, name: &str, sex: &str, document_number: &str) -> CreateWorkerDto {
        CreateWorkerDto {
            document_type: "DNI".to_string(),
            document_number: document_number.to_string(),
            name: name.to_string(),
            sex: sex.to_string(),
            department_id: geo.department_id,
            province_id: geo.province_id,
            district_id: geo.district_id,
        }
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_inserted_worker_listed_once_with_joined_names() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        let geo = seed_geography(&pool, "Lima", "Huaura", "Huacho").await;
        let service = WorkerService::new(pool);

        let created = service
            .create(create_dto(&geo, "Maria Lopez", "F", "12345678"))
            .await
            .unwrap();

        let listed = service.list(None).await.unwrap();
        assert_eq!(listed.len(), 1);

        let summary = &listed[0];
        assert_eq!(summary.id, created.id);
        assert_eq!(summary.name, "Maria Lopez");
        assert_eq!(summary.department, "Lima");
        assert_eq!(summary.province, "Huaura");
        assert_eq!(summary.district, "Huacho");
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_list_filters_sex_exactly() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        let geo = seed_geography(&pool, "Lima", "Lima", "Miraflores").await;
        let service = WorkerService::new(pool);

        service
            .create(create_dto(&geo, "Jose Quispe", "M", "11111111"))
            .await
            .unwrap();
        service
            .create(create_dto(&geo, "Ana Torres", "F", "22222222"))
            .await
            .unwrap();
        service
            .create(create_dto(&geo, "Luis Ramos", "M", "33333333"))
            .await
            .unwrap();

        let males = service.list(Some("M")).await.unwrap();
        assert_eq!(males.len(), 2);
        assert!(males.iter().all(|w| w.sex == "M"));

        let females = service.list(Some("F")).await.unwrap();
        assert_eq!(females.len(), 1);
        assert_eq!(females[0].name, "Ana Torres");

        let all = service.list(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_delete_twice_still_succeeds() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        let geo = seed_geography(&pool, "Cusco", "Urubamba", "Ollantaytambo").await;
        let service = WorkerService::new(pool);

        let worker = service
            .create(create_dto(&geo, "Rosa Huaman", "F", "44444444"))
            .await
            .unwrap();

        service.delete(worker.id).await.unwrap();
        assert!(!service.exists(worker.id).await.unwrap());

        // second delete of the same id is a no-op, not an error
        service.delete(worker.id).await.unwrap();
        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_update_missing_worker_is_not_found() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        let geo = seed_geography(&pool, "Arequipa", "Caylloma", "Chivay").await;
        let service = WorkerService::new(pool);

        let dto = UpdateWorkerDto {
            id: 9999,
            document_type: "DNI".to_string(),
            document_number: "55555555".to_string(),
            name: "Pedro Flores".to_string(),
            sex: "M".to_string(),
            department_id: geo.department_id,
            province_id: geo.province_id,
            district_id: geo.district_id,
        };

        let outcome = service.update(dto).await.unwrap();
        assert!(matches!(outcome, UpdateOutcome::NotFound));
    }
}
