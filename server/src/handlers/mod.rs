pub mod health;
pub mod school_handlers;
