use std::env;
use std::fmt;
use std::str::FromStr;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_ms", &self.acquire_timeout_ms)
            .finish()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::Configuration(format!("{} must be set", key)))
        };

        // Database config
        let db_host = required("DB_HOST")?;
        let db_user = required("DB_USER")?;
        let db_password = required("DB_PASS")?;
        let db_name = required("DB_NAME")?;
        let db_port = parse_value::<u16>("DB_PORT", &required("DB_PORT")?, "a valid port number")?;
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_value::<u32>("DB_MAX_CONNECTIONS", &raw, "a positive number")?,
            None => 10,
        };
        if max_connections == 0 {
            return Err(AppError::Configuration(
                "DB_MAX_CONNECTIONS must be a positive number".to_string(),
            ));
        }

        let acquire_timeout_ms = match lookup("DB_ACQUIRE_TIMEOUT_MS") {
            Some(raw) => parse_value::<u64>("DB_ACQUIRE_TIMEOUT_MS", &raw, "a number of milliseconds")?,
            None => 5000,
        };

        // Server config
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = match lookup("PORT") {
            Some(raw) => parse_value::<u16>("PORT", &raw, "a valid port number")?,
            None => 5000,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database: DatabaseConfig {
                host: db_host,
                port: db_port,
                user: db_user,
                password: db_password,
                name: db_name,
                max_connections,
                acquire_timeout_ms,
            },
            server: ServerConfig {
                host: server_host,
                port: server_port,
                cors_origins,
            },
        })
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str, expected: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::Configuration(format!("{} must be {}", key, expected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DB_HOST", "localhost"),
            ("DB_USER", "schools"),
            ("DB_PASS", "secret"),
            ("DB_NAME", "schools"),
            ("DB_PORT", "3306"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppSettings, AppError> {
        AppSettings::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_applied() {
        let settings = load(&base_vars()).unwrap();

        assert_eq!(settings.database.host, "localhost");
        assert_eq!(settings.database.port, 3306);
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.database.acquire_timeout_ms, 5000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_missing_required_variable() {
        let mut vars = base_vars();
        vars.remove("DB_NAME");

        match load(&vars) {
            Err(AppError::Configuration(msg)) => assert_eq!(msg, "DB_NAME must be set"),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_ports_rejected() {
        let mut vars = base_vars();
        vars.insert("DB_PORT", "mysql");
        assert!(matches!(load(&vars), Err(AppError::Configuration(_))));

        let mut vars = base_vars();
        vars.insert("PORT", "70000");
        assert!(matches!(load(&vars), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_overrides() {
        let mut vars = base_vars();
        vars.insert("PORT", "8080");
        vars.insert("DB_MAX_CONNECTIONS", "4");
        vars.insert("DB_ACQUIRE_TIMEOUT_MS", "250");
        vars.insert("CORS_ORIGINS", "https://a.example, https://b.example");

        let settings = load(&vars).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.database.max_connections, 4);
        assert_eq!(settings.database.acquire_timeout_ms, 250);
        assert_eq!(
            settings.server.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let mut vars = base_vars();
        vars.insert("DB_MAX_CONNECTIONS", "0");
        assert!(matches!(load(&vars), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let settings = load(&base_vars()).unwrap();
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
