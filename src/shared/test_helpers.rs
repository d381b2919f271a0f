//! Helpers for tests that run against a real PostgreSQL instance.
//!
//! The tests using these are `#[ignore]`d by default and expect
//! DATABASE_URL to point at a scratch database:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -- --ignored
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::Mutex;

/// Serializes database tests; they all truncate the same tables
pub static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct GeoFixture {
    pub department_id: i32,
    pub province_id: i32,
    pub district_id: i32,
}

/// Connect to DATABASE_URL, run migrations and clear all tables
pub async fn setup_pool() -> PgPool {
    let url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    sqlx::query("TRUNCATE workers, districts, provinces, departments RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("failed to clear tables");

    pool
}

/// Insert one department -> province -> district chain and return the ids
pub async fn seed_geography(
    pool: &PgPool,
    department: &str,
    province: &str,
    district: &str,
) -> GeoFixture {
    let department_id: i32 =
        sqlx::query_scalar("INSERT INTO departments (name) VALUES ($1) RETURNING id")
            .bind(department)
            .fetch_one(pool)
            .await
            .expect("failed to insert department");

    let province_id: i32 = sqlx::query_scalar(
        "INSERT INTO provinces (name, department_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(province)
    .bind(department_id)
    .fetch_one(pool)
    .await
    .expect("failed to insert province");

    let district_id: i32 = sqlx::query_scalar(
        "INSERT INTO districts (name, province_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(district)
    .bind(province_id)
    .fetch_one(pool)
    .await
    .expect("failed to insert district");

    GeoFixture {
        department_id,
        province_id,
        district_id,
    }
}
