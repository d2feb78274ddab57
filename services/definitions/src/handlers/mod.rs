pub mod dashboard;
pub mod definition;
pub mod health;
