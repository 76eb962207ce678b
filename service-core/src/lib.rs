//! service-core: Shared infrastructure for the verse-service workspace.
pub mod config;
pub mod error;
pub mod observability;
