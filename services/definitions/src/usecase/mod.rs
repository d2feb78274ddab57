pub mod dashboard;
pub mod definition;
