use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;
use crate::config::DatabaseConfig;
use crate::error::AppError;

const MAX_CONNECT_ATTEMPTS: u32 = 3;

/// Builds MySQL connection options from the database settings.
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
        .idle_timeout(Duration::from_secs(60))
}

/// Creates a MySQL connection pool, retrying a few times before failing.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, AppError> {
    log::info!(
        "Creating database connection pool for {}@{}:{}/{}",
        config.user, config.host, config.port, config.name
    );

    let mut last_error = None;

    for attempt in 1..=MAX_CONNECT_ATTEMPTS {
        log::info!("Database connection attempt {} of {}", attempt, MAX_CONNECT_ATTEMPTS);

        match pool_options(config).connect_with(connect_options(config)).await {
            Ok(pool) => {
                log::info!("Successfully connected to database");
                return Ok(pool);
            }
            Err(e) => {
                log::warn!("Database connection attempt {} failed: {}", attempt, e);

                if e.to_string().contains("Access denied") {
                    log::error!("Database authentication failed. Please check DB_USER and DB_PASS.");
                    return Err(AppError::from(e));
                }

                last_error = Some(e);

                if attempt < MAX_CONNECT_ATTEMPTS {
                    let delay = Duration::from_secs(2 * attempt as u64);
                    log::info!("Retrying in {} seconds...", delay.as_secs());
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    let error = last_error
        .unwrap_or_else(|| sqlx::Error::Configuration("Unknown database connection error".into()));
    log::error!("All database connection attempts failed: {}", error);

    Err(AppError::from(error))
}

/// Creates a pool that connects on first use.
///
/// Used when the database is unreachable at startup so requests can succeed
/// once it comes back.
pub fn create_lazy_pool(config: &DatabaseConfig) -> MySqlPool {
    pool_options(config).connect_lazy_with(connect_options(config))
}

/// Verifies the database connection by executing a simple query.
pub async fn verify_connection(pool: &MySqlPool) -> Result<(), AppError> {
    sqlx::query_as::<_, (i64,)>("SELECT 1")
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database connection verification failed: {}", e);
            AppError::from(e)
        })?;

    log::info!("Database connection verified successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "schools".to_string(),
            password: "secret".to_string(),
            name: "schools".to_string(),
            max_connections: 2,
            acquire_timeout_ms: 200,
        }
    }

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect_eagerly() {
        let pool = create_lazy_pool(&config());
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.options().get_max_connections(), 2);
        assert_eq!(pool.options().get_acquire_timeout(), Duration::from_millis(200));
    }
}
