//! Check-in reporting over the audit trail

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CheckIn, MealPlan, MealType};

/// Aggregated check-in figures
///
/// Built locally from a record list, or returned as-is by the backend's
/// analytics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInSummary {
    pub total: u32,
    pub active: u32,
    pub checked_out: u32,
    #[serde(default)]
    pub by_meal: BTreeMap<MealType, u32>,
    #[serde(default)]
    pub by_meal_plan: BTreeMap<MealPlan, u32>,
    #[serde(default)]
    pub by_outlet: BTreeMap<String, u32>,
    /// Mean minutes between check-in and check-out over completed records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_dining_minutes: Option<f64>,
}

impl CheckInSummary {
    pub fn from_records(records: &[CheckIn]) -> Self {
        let mut summary = Self::default();
        let mut minutes_total: i64 = 0;
        let mut completed: u32 = 0;

        for record in records {
            summary.total += 1;
            if record.is_active() {
                summary.active += 1;
            } else {
                summary.checked_out += 1;
            }

            *summary.by_meal.entry(record.meal_type).or_default() += 1;
            *summary.by_meal_plan.entry(record.meal_plan).or_default() += 1;
            *summary
                .by_outlet
                .entry(record.outlet_name.clone())
                .or_default() += 1;

            // Negative spans are bad data; leave them out of the mean
            if let Some(minutes) = record.dining_minutes().filter(|m| *m >= 0) {
                minutes_total += minutes;
                completed += 1;
            }
        }

        if completed > 0 {
            summary.average_dining_minutes = Some(minutes_total as f64 / f64::from(completed));
        }
        summary
    }

    pub fn count_for(&self, meal: MealType) -> u32 {
        self.by_meal.get(&meal).copied().unwrap_or(0)
    }
}
