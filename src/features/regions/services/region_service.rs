use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Department, District, Province};

/// Service for the department / province / district lookup hierarchy
pub struct RegionService {
    pool: PgPool,
}

impl RegionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all departments
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>(
            r#"
            SELECT id, name
            FROM departments
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch departments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(departments)
    }

    /// List provinces belonging to a department.
    ///
    /// Returns an empty list when the department has no provinces or does
    /// not exist; the parent is not looked up separately.
    pub async fn list_provinces_by_department(&self, department_id: i32) -> Result<Vec<Province>> {
        let provinces = sqlx::query_as::<_, Province>(
            r#"
            SELECT id, name, department_id
            FROM provinces
            WHERE department_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch provinces for department {}: {:?}",
                department_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(provinces)
    }

    /// List districts belonging to a province. Same contract as
    /// [`Self::list_provinces_by_department`].
    pub async fn list_districts_by_province(&self, province_id: i32) -> Result<Vec<District>> {
        let districts = sqlx::query_as::<_, District>(
            r#"
            SELECT id, name, province_id
            FROM districts
            WHERE province_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(province_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch districts for province {}: {:?}",
                province_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(districts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_geography, setup_pool, DB_LOCK};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_provinces_scoped_to_department() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        let lima = seed_geography(&pool, "Lima", "Lima", "Miraflores").await;
        let arequipa = seed_geography(&pool, "Arequipa", "Caylloma", "Chivay").await;
        let service = RegionService::new(pool);

        let lima_provinces = service
            .list_provinces_by_department(lima.department_id)
            .await
            .unwrap();
        assert_eq!(lima_provinces.len(), 1);
        assert_eq!(lima_provinces[0].name, "Lima");
        assert_eq!(lima_provinces[0].department_id, lima.department_id);

        let arequipa_provinces = service
            .list_provinces_by_department(arequipa.department_id)
            .await
            .unwrap();
        assert_eq!(arequipa_provinces.len(), 1);
        assert_eq!(arequipa_provinces[0].name, "Caylloma");

        let unknown = service.list_provinces_by_department(9999).await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_districts_scoped_to_province() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        let lima = seed_geography(&pool, "Lima", "Lima", "Miraflores").await;
        let arequipa = seed_geography(&pool, "Arequipa", "Caylloma", "Chivay").await;
        let service = RegionService::new(pool);

        let lima_districts = service
            .list_districts_by_province(lima.province_id)
            .await
            .unwrap();
        assert_eq!(lima_districts.len(), 1);
        assert_eq!(lima_districts[0].name, "Miraflores");

        let arequipa_districts = service
            .list_districts_by_province(arequipa.province_id)
            .await
            .unwrap();
        assert_eq!(arequipa_districts.len(), 1);
        assert_eq!(arequipa_districts[0].name, "Chivay");

        let unknown = service.list_districts_by_province(9999).await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch database"]
    async fn test_departments_listed_by_name() {
        let _guard = DB_LOCK.lock().await;
        let pool = setup_pool().await;
        seed_geography(&pool, "Lima", "Lima", "Miraflores").await;
        seed_geography(&pool, "Arequipa", "Caylloma", "Chivay").await;
        let service = RegionService::new(pool);

        let departments = service.list_departments().await.unwrap();
        let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Arequipa", "Lima"]);
    }
}
