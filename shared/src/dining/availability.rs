//! Room availability for the active meal period

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::models::MealType;

/// Rooms still free to check in for the active meal.
///
/// Outside every service window nothing may be checked in, so the result is
/// 0 regardless of the counts. Inconsistent counts (more check-ins than
/// rooms) clamp to 0.
pub fn compute_availability(
    total_rooms: u32,
    current_period_check_ins: u32,
    within_period: bool,
) -> u32 {
    if !within_period {
        return 0;
    }
    total_rooms.saturating_sub(current_period_check_ins)
}

/// Derived per-resort stats for one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    pub resort_id: i64,
    /// Meal in service, `None` between services
    pub meal: Option<MealType>,
    pub within_period: bool,
    pub total_rooms: u32,
    /// Rooms checked in for the active meal, clamped to `total_rooms`
    pub occupied: u32,
    pub available: u32,
    /// All check-ins of the day; display only
    pub today_check_ins: u32,
}

impl AvailabilitySnapshot {
    pub fn compute(
        resort_id: i64,
        meal: Option<MealType>,
        within_period: bool,
        total_rooms: u32,
        current_period_check_ins: u32,
        today_check_ins: u32,
    ) -> Self {
        Self {
            resort_id,
            meal,
            within_period,
            total_rooms,
            occupied: current_period_check_ins.min(total_rooms),
            available: compute_availability(total_rooms, current_period_check_ins, within_period),
            today_check_ins,
        }
    }

    /// Percentage of rooms checked in for the active meal
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_rooms == 0 {
            return 0.0;
        }
        f64::from(self.occupied) / f64::from(self.total_rooms) * 100.0
    }
}

/// What a stats panel shows
///
/// A failed load is `Unavailable`, never a zero snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatsState {
    #[default]
    Loading,
    Ready(AvailabilitySnapshot),
    Unavailable { code: ErrorCode, message: String },
}

impl StatsState {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StatsState::Unavailable {
            code: ErrorCode::StatsUnavailable,
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StatsState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StatsState::Unavailable { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            StatsState::Unavailable { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&AvailabilitySnapshot> {
        match self {
            StatsState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}
