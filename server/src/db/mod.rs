pub mod connection;
pub mod repositories;

// Re-export the connection module's functions for ease of use
pub use connection::{connect_options, create_pool, create_lazy_pool, verify_connection};
pub use repositories::*;
