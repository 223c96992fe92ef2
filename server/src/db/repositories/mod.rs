pub mod memory_school_store;
pub mod school_repository;

pub use memory_school_store::MemorySchoolStore;
pub use school_repository::{SchoolRepository, SchoolStore, SCHOOLS_TABLE};
