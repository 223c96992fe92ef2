//! School directory server library
//!
//! Exposes the modules used by the server binary and the integration tests:
//! a record store over the `schooldata` table, haversine distance ranking,
//! and the actix-web handlers that tie them together.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::{AppError, AppResult};
pub use services::SchoolService;
