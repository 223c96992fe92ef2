pub mod school_service;

// Re-export commonly used types
pub use school_service::{rank_by_distance, SchoolService};
