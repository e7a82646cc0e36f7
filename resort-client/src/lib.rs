//! Resort Client - async client for the resort operations backend
//!
//! Typed REST gateways, an explicit session context, availability
//! monitoring and check-in / check-out submission on top of the pure
//! dining rules in `shared`.

pub mod api;
pub mod availability;
pub mod client;
pub mod config;
pub mod error;
mod lifecycle;
pub mod logger;
pub mod session;

pub use availability::{AvailabilityMonitor, RefreshOutcome, StatsSource, load_availability};
pub use client::{HttpClient, NetworkHttpClient, ResortClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{Claims, SessionContext, SessionState, decode_claims};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse};
pub use shared::dining::{CheckInForm, CheckOutForm, MealSchedule, RoomSlot, SlotState, StatsState};
