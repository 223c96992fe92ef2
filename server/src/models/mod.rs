pub mod school;

pub use school::{NewSchool, School, SchoolWithDistance};
