//! Shared types for the resort dining client
//!
//! Domain models, the error system, the `{ success, data }` response
//! envelope and the pure dining rules (meal periods, availability, the
//! check-in lifecycle).

pub mod client;
pub mod dining;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
