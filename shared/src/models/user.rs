//! User Model

use serde::{Deserialize, Serialize};

use super::check_in::MealType;
use super::role::Role;
use crate::error::{AppError, AppResult, ErrorCode};

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    #[default]
    Inactive,
}

/// Where a user works; required before activation for Manager and Host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserAssignment {
    pub resort_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub meal_type: Option<MealType>,
}

/// User entity (without password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub resort_id: Option<i64>,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

impl User {
    pub fn assignment(&self) -> UserAssignment {
        UserAssignment {
            resort_id: self.resort_id,
            restaurant_id: self.restaurant_id,
            meal_type: self.meal_type,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Whether this user may be switched to `Active` as-is
    pub fn validate_activation(&self) -> AppResult<()> {
        validate_activation(self.role, &self.assignment())
    }

    /// This user as it would look after `update`
    pub fn merged(&self, update: &UserUpdate) -> User {
        User {
            id: self.id,
            username: update.username.clone().unwrap_or_else(|| self.username.clone()),
            email: update.email.clone().unwrap_or_else(|| self.email.clone()),
            role: update.role.unwrap_or(self.role),
            status: self.status,
            resort_id: update.resort_id.or(self.resort_id),
            restaurant_id: update.restaurant_id.or(self.restaurant_id),
            meal_type: update.meal_type.or(self.meal_type),
        }
    }
}

/// Activation precondition per role
///
/// - Admin: no assignment needed
/// - Manager: resort or restaurant
/// - Host: resort, restaurant and meal type
pub fn validate_activation(role: Role, assignment: &UserAssignment) -> AppResult<()> {
    match role {
        Role::Admin => Ok(()),
        Role::Manager => {
            if assignment.resort_id.is_none() && assignment.restaurant_id.is_none() {
                return Err(AppError::with_message(
                    ErrorCode::AssignmentRequired,
                    "Manager must be assigned to a resort or restaurant before activation",
                )
                .with_detail("role", role.as_str()));
            }
            Ok(())
        }
        Role::Host => {
            let missing: Vec<&str> = [
                ("resort_id", assignment.resort_id.is_none()),
                ("restaurant_id", assignment.restaurant_id.is_none()),
                ("meal_type", assignment.meal_type.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();

            if !missing.is_empty() {
                return Err(AppError::with_message(
                    ErrorCode::AssignmentRequired,
                    format!("Host activation requires {}", missing.join(", ")),
                )
                .with_detail("role", role.as_str())
                .with_detail("missing", missing));
            }
            Ok(())
        }
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(flatten)]
    pub assignment: UserAssignment,
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resort_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

impl UserUpdate {
    /// Whether the update can affect the activation precondition
    pub fn touches_assignment(&self) -> bool {
        self.role.is_some()
            || self.resort_id.is_some()
            || self.restaurant_id.is_some()
            || self.meal_type.is_some()
    }
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusUpdate {
    pub status: UserStatus,
}
