//! Shared types for the HR backend
//!
//! Common types used across crates: the unified error system, wire
//! models (requests, responses, patch structs) and time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
