//! Data models
//!
//! Mirrors the backend's JSON resources. All IDs are `i64`.

pub mod check_in;
pub mod resort;
pub mod restaurant;
pub mod role;
pub mod room;
pub mod user;

// Re-exports
pub use check_in::*;
pub use resort::*;
pub use restaurant::*;
pub use role::*;
pub use room::*;
pub use user::*;
