//! Shared types for the Smartket backend
//!
//! Domain models exchanged over the HTTP API and read from the store,
//! plus small time utilities.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
