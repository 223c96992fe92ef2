pub mod settings;

pub use settings::{AppSettings, DatabaseConfig, ServerConfig};

/// Initialize application configuration
pub fn init_config() -> Result<AppSettings, crate::error::AppError> {
    log::info!("Initializing application configuration from environment");
    AppSettings::from_env()
}
