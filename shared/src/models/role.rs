//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Host,
}

/// Roles allowed to check a guest out
pub const CHECKOUT_ROLES: &[Role] = &[Role::Admin, Role::Manager];

/// Roles allowed to administer users
pub const USER_ADMIN_ROLES: &[Role] = &[Role::Admin];

/// Roles allowed to manage resorts, rooms and outlets
pub const PROPERTY_ADMIN_ROLES: &[Role] = &[Role::Admin, Role::Manager];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Host => "Host",
        }
    }

    pub fn can_check_out(&self) -> bool {
        CHECKOUT_ROLES.contains(self)
    }

    pub fn can_manage_users(&self) -> bool {
        USER_ADMIN_ROLES.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "host" => Ok(Role::Host),
            other => Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Unknown role: {}", other),
            )),
        }
    }
}

/// Single capability check used for every role-gated surface.
///
/// This only decides what to show; the backend enforces authorization.
pub fn has_any_role(role: Option<Role>, allowed: &[Role]) -> bool {
    role.is_some_and(|r| allowed.contains(&r))
}
