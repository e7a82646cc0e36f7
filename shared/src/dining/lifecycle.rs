//! Dining slot lifecycle
//!
//! One slot per room × meal period × service date:
//! `available → checked-in → checked-out`. A new period or day starts a
//! fresh slot. Transitions are two-phase: `prepare_*` validates and builds
//! the backend request, `confirm_*` applies the state change once the
//! backend accepted it.

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{
    CHECKOUT_ROLES, CheckIn, CheckInRequest, CheckOutRequest, MealPlan, MealType, Role,
    has_any_role,
};

/// Minimum length of checkout remarks, in characters
pub const MIN_CHECKOUT_REMARKS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotState {
    Available,
    CheckedIn,
    CheckedOut,
}

/// Check-in form as filled in by staff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInForm {
    pub resort_id: Option<i64>,
    pub room_id: Option<i64>,
    #[serde(default)]
    pub outlet_name: String,
    pub meal_type: Option<MealType>,
    pub meal_plan: Option<MealPlan>,
    #[serde(default)]
    pub table_number: String,
}

impl CheckInForm {
    /// All fields are required; the first blank one is reported
    pub fn validate(&self) -> AppResult<CheckInRequest> {
        let resort_id = self.resort_id.ok_or_else(|| AppError::required("resort_id"))?;
        let room_id = self.room_id.ok_or_else(|| AppError::required("room_id"))?;
        let outlet_name = required_text(&self.outlet_name, "outlet_name")?;
        let meal_type = self.meal_type.ok_or_else(|| AppError::required("meal_type"))?;
        let meal_plan = self.meal_plan.ok_or_else(|| AppError::required("meal_plan"))?;
        let table_number = required_text(&self.table_number, "table_number")?;

        Ok(CheckInRequest {
            resort_id,
            room_id,
            outlet_name,
            meal_type,
            meal_plan,
            table_number,
        })
    }
}

/// Check-out form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckOutForm {
    pub check_in_id: i64,
    #[serde(default)]
    pub remarks: String,
}

impl CheckOutForm {
    /// Role is checked before anything else; then remarks length.
    pub fn validate(&self, role: Option<Role>) -> AppResult<CheckOutRequest> {
        ensure_checkout_role(role)?;

        let remarks = self.remarks.trim();
        let len = remarks.chars().count();
        if len < MIN_CHECKOUT_REMARKS {
            return Err(AppError::with_message(
                ErrorCode::RemarksTooShort,
                format!(
                    "Remarks must be at least {} characters",
                    MIN_CHECKOUT_REMARKS
                ),
            )
            .with_detail("min", MIN_CHECKOUT_REMARKS)
            .with_detail("actual", len));
        }

        Ok(CheckOutRequest {
            check_in_id: self.check_in_id,
            remarks: remarks.to_string(),
        })
    }
}

/// Host (or no role at all) may not check guests out.
///
/// Client-side gate only; the backend re-checks.
pub fn ensure_checkout_role(role: Option<Role>) -> AppResult<()> {
    if has_any_role(role, CHECKOUT_ROLES) {
        return Ok(());
    }
    let err = AppError::new(ErrorCode::CheckoutNotPermitted);
    Err(match role {
        Some(r) => err.with_detail("role", r.as_str()),
        None => err,
    })
}

/// Room slot for one meal period on one service date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSlot {
    pub room_id: i64,
    pub service_date: NaiveDate,
    pub meal: MealType,
    pub state: SlotState,
    /// Active record id while checked in
    pub check_in_id: Option<i64>,
}

impl RoomSlot {
    pub fn new(room_id: i64, service_date: NaiveDate, meal: MealType) -> Self {
        Self {
            room_id,
            service_date,
            meal,
            state: SlotState::Available,
            check_in_id: None,
        }
    }

    /// Derive the slot from the backend's records.
    ///
    /// More than one active record for the same slot violates the
    /// one-active-check-in rule and is reported instead of guessed around.
    pub fn from_records<Tz: TimeZone>(
        room_id: i64,
        service_date: NaiveDate,
        meal: MealType,
        records: &[CheckIn],
        tz: &Tz,
    ) -> AppResult<Self> {
        let mut slot = Self::new(room_id, service_date, meal);
        let relevant = records.iter().filter(|r| {
            r.room_id == room_id && r.meal_type == meal && r.service_date(tz) == service_date
        });

        let mut active: Option<&CheckIn> = None;
        let mut closed = false;
        for record in relevant {
            if record.is_active() {
                if let Some(existing) = active {
                    return Err(AppError::new(ErrorCode::RoomAlreadyCheckedIn)
                        .with_detail("room_id", room_id)
                        .with_detail("meal", meal.as_str())
                        .with_detail("check_in_ids", vec![existing.id, record.id]));
                }
                active = Some(record);
            } else {
                closed = true;
            }
        }

        if let Some(record) = active {
            slot.state = SlotState::CheckedIn;
            slot.check_in_id = Some(record.id);
        } else if closed {
            slot.state = SlotState::CheckedOut;
        }
        Ok(slot)
    }

    /// Start over as `Available` when the period or day changed
    pub fn roll_to(&mut self, service_date: NaiveDate, meal: MealType) {
        if self.service_date != service_date || self.meal != meal {
            *self = Self::new(self.room_id, service_date, meal);
        }
    }

    pub fn prepare_check_in(&self, form: &CheckInForm) -> AppResult<CheckInRequest> {
        // 1. Slot must still be open for this period
        match self.state {
            SlotState::Available => {}
            SlotState::CheckedIn => {
                return Err(AppError::new(ErrorCode::RoomAlreadyCheckedIn)
                    .with_detail("room_id", self.room_id));
            }
            SlotState::CheckedOut => {
                return Err(AppError::new(ErrorCode::SlotClosed)
                    .with_detail("room_id", self.room_id));
            }
        }

        // 2. Form must be complete
        let request = form.validate()?;

        // 3. Form must target this slot
        if request.room_id != self.room_id || request.meal_type != self.meal {
            return Err(AppError::validation(format!(
                "Form targets room {} / {} but slot is room {} / {}",
                request.room_id, request.meal_type, self.room_id, self.meal
            )));
        }

        Ok(request)
    }

    pub fn confirm_check_in(&mut self, record: &CheckIn) {
        self.state = SlotState::CheckedIn;
        self.check_in_id = Some(record.id);
    }

    pub fn prepare_check_out(
        &self,
        role: Option<Role>,
        form: &CheckOutForm,
    ) -> AppResult<CheckOutRequest> {
        // 1. Authorization first; nothing else is looked at for a Host
        ensure_checkout_role(role)?;

        // 2. Only an active slot can be closed
        match self.state {
            SlotState::CheckedIn => {}
            SlotState::Available => {
                return Err(AppError::new(ErrorCode::NotCheckedIn)
                    .with_detail("room_id", self.room_id));
            }
            SlotState::CheckedOut => {
                return Err(AppError::new(ErrorCode::SlotClosed)
                    .with_detail("room_id", self.room_id));
            }
        }

        // 3. Remarks
        form.validate(role)
    }

    pub fn confirm_check_out(&mut self) {
        self.state = SlotState::CheckedOut;
        self.check_in_id = None;
    }
}

fn required_text(value: &str, field: &'static str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckInStatus;
    use chrono::{TimeZone, Utc};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 14).unwrap()
    }

    fn full_form() -> CheckInForm {
        CheckInForm {
            resort_id: Some(1),
            room_id: Some(204),
            outlet_name: "Sea Breeze".to_string(),
            meal_type: Some(MealType::Breakfast),
            meal_plan: Some(MealPlan::AllInclusive),
            table_number: "7".to_string(),
        }
    }

    fn record(id: i64, room_id: i64, status: CheckInStatus) -> CheckIn {
        CheckIn {
            id,
            room_id,
            resort_id: 1,
            outlet_name: "Sea Breeze".to_string(),
            table_number: "7".to_string(),
            meal_type: MealType::Breakfast,
            meal_plan: MealPlan::AllInclusive,
            check_in_time: Utc.with_ymd_and_hms(2026, 7, 14, 8, 0, 0).unwrap(),
            check_out_time: match status {
                CheckInStatus::CheckedOut => {
                    Some(Utc.with_ymd_and_hms(2026, 7, 14, 8, 50, 0).unwrap())
                }
                CheckInStatus::CheckedIn => None,
            },
            status,
            remarks: None,
        }
    }

    #[test]
    fn test_check_in_form_complete() {
        let req = full_form().validate().unwrap();
        assert_eq!(req.room_id, 204);
        assert_eq!(req.table_number, "7");
    }

    #[test]
    fn test_check_in_rejects_blank_table_number() {
        let slot = RoomSlot::new(204, date(), MealType::Breakfast);
        let form = CheckInForm {
            table_number: "   ".to_string(),
            ..full_form()
        };

        let err = slot.prepare_check_in(&form).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.detail("field"), Some(&serde_json::json!("table_number")));
        assert_eq!(slot.state, SlotState::Available);
    }

    #[test]
    fn test_check_in_reports_each_missing_field() {
        let cases: Vec<(CheckInForm, &str)> = vec![
            (CheckInForm { resort_id: None, ..full_form() }, "resort_id"),
            (CheckInForm { room_id: None, ..full_form() }, "room_id"),
            (CheckInForm { outlet_name: String::new(), ..full_form() }, "outlet_name"),
            (CheckInForm { meal_type: None, ..full_form() }, "meal_type"),
            (CheckInForm { meal_plan: None, ..full_form() }, "meal_plan"),
        ];
        for (form, field) in cases {
            let err = form.validate().unwrap_err();
            assert_eq!(err.detail("field"), Some(&serde_json::json!(field)));
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let mut slot = RoomSlot::new(204, date(), MealType::Breakfast);

        let req = slot.prepare_check_in(&full_form()).unwrap();
        assert_eq!(req.meal_plan, MealPlan::AllInclusive);
        slot.confirm_check_in(&record(31, 204, CheckInStatus::CheckedIn));
        assert_eq!(slot.state, SlotState::CheckedIn);
        assert_eq!(slot.check_in_id, Some(31));

        let form = CheckOutForm {
            check_in_id: 31,
            remarks: "Guest left early".to_string(),
        };
        let out = slot.prepare_check_out(Some(Role::Manager), &form).unwrap();
        assert_eq!(out.check_in_id, 31);
        slot.confirm_check_out();
        assert_eq!(slot.state, SlotState::CheckedOut);

        // No way back within the same period
        let err = slot.prepare_check_in(&full_form()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotClosed);
    }

    #[test]
    fn test_remarks_length_boundary() {
        let nine = CheckOutForm {
            check_in_id: 1,
            remarks: "a".repeat(9),
        };
        let err = nine.validate(Some(Role::Admin)).unwrap_err();
        assert_eq!(err.code, ErrorCode::RemarksTooShort);
        assert_eq!(err.detail("actual"), Some(&serde_json::json!(9)));

        let ten = CheckOutForm {
            check_in_id: 1,
            remarks: "a".repeat(10),
        };
        assert!(ten.validate(Some(Role::Admin)).is_ok());

        let padded = CheckOutForm {
            check_in_id: 1,
            remarks: format!("  {}  ", "b".repeat(9)),
        };
        assert!(padded.validate(Some(Role::Admin)).is_err());
    }

    #[test]
    fn test_host_cannot_check_out() {
        let mut slot = RoomSlot::new(204, date(), MealType::Breakfast);
        slot.confirm_check_in(&record(31, 204, CheckInStatus::CheckedIn));

        let form = CheckOutForm {
            check_in_id: 31,
            remarks: "short".to_string(),
        };
        // Role is rejected before remarks are looked at
        let err = slot.prepare_check_out(Some(Role::Host), &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutNotPermitted);

        let err = slot.prepare_check_out(None, &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutNotPermitted);
        assert_eq!(slot.state, SlotState::CheckedIn);
    }

    #[test]
    fn test_check_out_requires_active_slot() {
        let slot = RoomSlot::new(204, date(), MealType::Breakfast);
        let form = CheckOutForm {
            check_in_id: 31,
            remarks: "Everything fine".to_string(),
        };
        let err = slot.prepare_check_out(Some(Role::Admin), &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotCheckedIn);
    }

    #[test]
    fn test_form_must_match_slot() {
        let slot = RoomSlot::new(999, date(), MealType::Breakfast);
        let err = slot.prepare_check_in(&full_form()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_roll_to_new_period_resets() {
        let mut slot = RoomSlot::new(204, date(), MealType::Breakfast);
        slot.confirm_check_in(&record(31, 204, CheckInStatus::CheckedIn));
        slot.confirm_check_out();

        slot.roll_to(date(), MealType::Breakfast);
        assert_eq!(slot.state, SlotState::CheckedOut);

        slot.roll_to(date(), MealType::Lunch);
        assert_eq!(slot.state, SlotState::Available);
        assert_eq!(slot.meal, MealType::Lunch);

        slot.confirm_check_in(&record(40, 204, CheckInStatus::CheckedIn));
        slot.roll_to(date().succ_opt().unwrap(), MealType::Lunch);
        assert_eq!(slot.state, SlotState::Available);
        assert!(slot.check_in_id.is_none());
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            record(1, 204, CheckInStatus::CheckedOut),
            record(2, 205, CheckInStatus::CheckedIn),
        ];

        let derive = |room, day, meal| RoomSlot::from_records(room, day, meal, &records, &Utc);

        let slot = derive(204, date(), MealType::Breakfast).unwrap();
        assert_eq!(slot.state, SlotState::CheckedOut);

        let slot = derive(205, date(), MealType::Breakfast).unwrap();
        assert_eq!(slot.state, SlotState::CheckedIn);
        assert_eq!(slot.check_in_id, Some(2));

        let slot = derive(205, date(), MealType::Dinner).unwrap();
        assert_eq!(slot.state, SlotState::Available);

        let other_day = date().succ_opt().unwrap();
        let slot = derive(205, other_day, MealType::Breakfast).unwrap();
        assert_eq!(slot.state, SlotState::Available);
    }

    #[test]
    fn test_from_records_rejects_two_active() {
        let records = vec![
            record(1, 204, CheckInStatus::CheckedIn),
            record(2, 204, CheckInStatus::CheckedIn),
        ];
        let err = RoomSlot::from_records(204, date(), MealType::Breakfast, &records, &Utc)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomAlreadyCheckedIn);
        assert_eq!(err.detail("check_in_ids"), Some(&serde_json::json!([1, 2])));
    }
}
