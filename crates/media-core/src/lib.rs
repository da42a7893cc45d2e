//! HTTP plumbing shared by media API services: error body, health checks,
//! request ids, timestamp serialization, and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
