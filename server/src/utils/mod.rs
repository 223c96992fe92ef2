pub mod geo;
pub mod school_validation;
