//! Check-in Model (dining audit trail)

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult, ErrorCode};

/// Meal service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Unknown meal type: {}", other),
            )),
        }
    }
}

/// Board arrangement of the guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealPlan {
    AllInclusive,
    FullBoard,
    HalfBoard,
}

impl MealPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPlan::AllInclusive => "all-inclusive",
            MealPlan::FullBoard => "full-board",
            MealPlan::HalfBoard => "half-board",
        }
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check-in record status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckInStatus {
    CheckedIn,
    CheckedOut,
}

/// Check-in record
///
/// Created on guest arrival, mutated once on check-out, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: i64,
    pub room_id: i64,
    pub resort_id: i64,
    pub outlet_name: String,
    pub table_number: String,
    pub meal_type: MealType,
    pub meal_plan: MealPlan,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub status: CheckInStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl CheckIn {
    /// Checked in and not yet checked out
    pub fn is_active(&self) -> bool {
        self.status == CheckInStatus::CheckedIn
    }

    /// Calendar day of the check-in in the given time zone
    pub fn service_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.check_in_time.with_timezone(tz).date_naive()
    }

    /// Minutes between check-in and check-out, if checked out
    pub fn dining_minutes(&self) -> Option<i64> {
        self.check_out_time
            .map(|out| (out - self.check_in_time).num_minutes())
    }

    /// Check-out must not precede check-in and must fall on the same service day
    pub fn validate_times<Tz: TimeZone>(&self, tz: &Tz) -> AppResult<()> {
        let Some(out) = self.check_out_time else {
            return Ok(());
        };

        if out < self.check_in_time {
            return Err(AppError::with_message(
                ErrorCode::InvalidCheckoutTime,
                "Check-out time precedes check-in time",
            )
            .with_detail("check_in_id", self.id));
        }

        if out.with_timezone(tz).date_naive() != self.service_date(tz) {
            return Err(AppError::with_message(
                ErrorCode::InvalidCheckoutTime,
                "Check-out must happen on the same service day",
            )
            .with_detail("check_in_id", self.id));
        }

        Ok(())
    }
}

/// `POST /checkins/check-in` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub resort_id: i64,
    pub room_id: i64,
    pub outlet_name: String,
    pub meal_type: MealType,
    pub meal_plan: MealPlan,
    pub table_number: String,
}

/// `POST /checkins/check-out` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutRequest {
    pub check_in_id: i64,
    pub remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(check_in: DateTime<Utc>, check_out: Option<DateTime<Utc>>) -> CheckIn {
        CheckIn {
            id: 7,
            room_id: 101,
            resort_id: 1,
            outlet_name: "Azure".to_string(),
            table_number: "12".to_string(),
            meal_type: MealType::Lunch,
            meal_plan: MealPlan::HalfBoard,
            check_in_time: check_in,
            check_out_time: check_out,
            status: if check_out.is_some() {
                CheckInStatus::CheckedOut
            } else {
                CheckInStatus::CheckedIn
            },
            remarks: None,
        }
    }

    #[test]
    fn test_meal_type_serde_and_parse() {
        assert_eq!(
            serde_json::to_string(&MealType::Breakfast).unwrap(),
            "\"breakfast\""
        );
        assert_eq!("Dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        let err = "brunch".parse::<MealType>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_meal_plan_and_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&MealPlan::AllInclusive).unwrap(),
            "\"all-inclusive\""
        );
        assert_eq!(
            serde_json::from_str::<MealPlan>("\"half-board\"").unwrap(),
            MealPlan::HalfBoard
        );
        assert_eq!(
            serde_json::to_string(&CheckInStatus::CheckedOut).unwrap(),
            "\"checked-out\""
        );
    }

    #[test]
    fn test_validate_times_accepts_open_and_same_day() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 5, 0).unwrap();
        assert!(record(t0, None).validate_times(&Utc).is_ok());

        let t1 = Utc.with_ymd_and_hms(2026, 3, 1, 13, 40, 0).unwrap();
        let rec = record(t0, Some(t1));
        assert!(rec.validate_times(&Utc).is_ok());
        assert_eq!(rec.dining_minutes(), Some(95));
    }

    #[test]
    fn test_validate_times_rejects_reversed_and_next_day() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 5, 0).unwrap();

        let before = Utc.with_ymd_and_hms(2026, 3, 1, 11, 0, 0).unwrap();
        let err = record(t0, Some(before)).validate_times(&Utc).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCheckoutTime);

        let next_day = Utc.with_ymd_and_hms(2026, 3, 2, 0, 30, 0).unwrap();
        let err = record(t0, Some(next_day)).validate_times(&Utc).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCheckoutTime);
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "id": 3,
            "room_id": 12,
            "resort_id": 1,
            "outlet_name": "Coral Terrace",
            "table_number": "4",
            "meal_type": "breakfast",
            "meal_plan": "full-board",
            "check_in_time": "2026-05-04T07:45:00Z",
            "check_out_time": null,
            "status": "checked-in"
        }"#;
        let rec: CheckIn = serde_json::from_str(json).unwrap();
        assert!(rec.is_active());
        assert_eq!(rec.meal_plan, MealPlan::FullBoard);
        assert!(rec.remarks.is_none());
    }
}
