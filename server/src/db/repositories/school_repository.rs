use crate::error::{AppError, AppResult};
use crate::models::{NewSchool, School};
use async_trait::async_trait;
use sqlx::{query, query_as, MySqlPool};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const SCHOOLS_TABLE: &str = "schooldata";

const CREATE_TABLE_QUERY: &str = r#"
    CREATE TABLE IF NOT EXISTS schooldata (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        address VARCHAR(255) NOT NULL,
        latitude DOUBLE NOT NULL,
        longitude DOUBLE NOT NULL
    )
"#;

/// Persistence for school records.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Inserts a school and returns the id assigned by the store.
    async fn create(&self, school: NewSchool) -> AppResult<i64>;

    /// Returns every stored school in insertion order.
    async fn list_all(&self) -> AppResult<Vec<School>>;

    /// Removes every school and returns the number of rows removed.
    async fn delete_all(&self) -> AppResult<u64>;

    /// Checks that the store can serve requests.
    async fn ping(&self) -> AppResult<()>;
}

pub struct SchoolRepository {
    db_pool: Arc<MySqlPool>,
    schema_ready: AtomicBool,
}

impl SchoolRepository {
    pub fn new(db_pool: Arc<MySqlPool>) -> Self {
        Self {
            db_pool,
            schema_ready: AtomicBool::new(false),
        }
    }

    /// Creates the `schooldata` table if it does not exist yet.
    ///
    /// Runs once per repository; after a failure the next operation tries again,
    /// which lets the server recover when the database comes back.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }

        query(CREATE_TABLE_QUERY)
            .execute(self.db_pool.as_ref())
            .await
            .map_err(|e| {
                log::error!("Error creating table {}: {}", SCHOOLS_TABLE, e);
                AppError::from(e)
            })?;

        self.schema_ready.store(true, Ordering::Release);
        log::info!("Table {} is ready", SCHOOLS_TABLE);
        Ok(())
    }
}

#[async_trait]
impl SchoolStore for SchoolRepository {
    async fn create(&self, school: NewSchool) -> AppResult<i64> {
        self.ensure_schema().await?;

        let result = query(
            r#"
            INSERT INTO schooldata (name, address, latitude, longitude)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(self.db_pool.as_ref())
        .await?;

        i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::Database(format!("insert id {} out of range", result.last_insert_id())))
    }

    async fn list_all(&self) -> AppResult<Vec<School>> {
        self.ensure_schema().await?;

        let schools = query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude
            FROM schooldata
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db_pool.as_ref())
        .await?;

        Ok(schools)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        self.ensure_schema().await?;

        let result = query("DELETE FROM schooldata")
            .execute(self.db_pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> AppResult<()> {
        self.ensure_schema().await?;

        query_as::<_, (i64,)>("SELECT 1")
            .fetch_optional(self.db_pool.as_ref())
            .await?;

        Ok(())
    }
}
