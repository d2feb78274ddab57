//! Ambient building blocks shared by Kamus services.
//!
//! Configuration loading, tracing setup, the JSON response envelope, request-id
//! middleware, health handlers, and small sea-orm helpers.

pub mod config;
pub mod envelope;
pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
