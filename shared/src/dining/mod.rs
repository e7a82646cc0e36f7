//! Dining domain logic
//!
//! Pure, synchronous rules shared by every client: meal period resolution,
//! availability, the per-room check-in lifecycle and reporting.

mod availability;
mod lifecycle;
mod meal_period;
mod report;

pub use availability::{compute_availability, AvailabilitySnapshot, StatsState};
pub use lifecycle::{
    ensure_checkout_role, CheckInForm, CheckOutForm, RoomSlot, SlotState, MIN_CHECKOUT_REMARKS,
};
pub use meal_period::{parse_time_of_day, MealSchedule, MealWindow};
pub use report::CheckInSummary;
