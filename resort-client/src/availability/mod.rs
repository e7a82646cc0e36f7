//! Availability loading and periodic refresh

mod monitor;
mod source;

pub use monitor::{AvailabilityMonitor, RefreshOutcome};
pub use source::{StatsSource, load_availability};
