//! Unified error codes for the resort dining client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Resort / room / outlet errors (backend only)
//! - 4xxx: Dining (check-in / check-out) errors
//! - 5xxx: User administration errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive the trip
/// through JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Role may not check guests out
    CheckoutNotPermitted = 2010,

    // ==================== 4xxx: Dining ====================
    /// The room already has an active check-in for this meal period
    RoomAlreadyCheckedIn = 4002,
    /// The room has no active check-in to close
    NotCheckedIn = 4003,
    /// The slot was already checked out for this meal period
    SlotClosed = 4004,
    /// Checkout remarks are shorter than required
    RemarksTooShort = 4005,
    /// Check-out time precedes check-in time or falls on another day
    InvalidCheckoutTime = 4006,
    /// Meal window configuration is invalid
    InvalidMealWindow = 4007,

    // ==================== 5xxx: User ====================
    /// Active user lacks the assignment its role requires
    AssignmentRequired = 5003,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    NetworkError = 9003,
    TimeoutError = 9004,
    ConfigError = 9005,
    /// Availability stats could not be loaded
    StatsUnavailable = 9101,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::CheckoutNotPermitted => "Only Admin or Manager may check guests out",

            // Dining
            ErrorCode::RoomAlreadyCheckedIn => "Room is already checked in for this meal",
            ErrorCode::NotCheckedIn => "Room is not checked in",
            ErrorCode::SlotClosed => "Room was already checked out for this meal",
            ErrorCode::RemarksTooShort => "Checkout remarks are too short",
            ErrorCode::InvalidCheckoutTime => "Check-out time is invalid",
            ErrorCode::InvalidMealWindow => "Meal window is invalid",

            // User
            ErrorCode::AssignmentRequired => "User assignment is required for this role",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StatsUnavailable => "Availability stats are unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2010 => Ok(ErrorCode::CheckoutNotPermitted),

            // Dining
            4002 => Ok(ErrorCode::RoomAlreadyCheckedIn),
            4003 => Ok(ErrorCode::NotCheckedIn),
            4004 => Ok(ErrorCode::SlotClosed),
            4005 => Ok(ErrorCode::RemarksTooShort),
            4006 => Ok(ErrorCode::InvalidCheckoutTime),
            4007 => Ok(ErrorCode::InvalidMealWindow),

            // User
            5003 => Ok(ErrorCode::AssignmentRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::StatsUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::CheckoutNotPermitted.code(), 2010);
        assert_eq!(ErrorCode::RemarksTooShort.code(), 4005);
        assert_eq!(ErrorCode::StatsUnavailable.code(), 9101);
    }

    #[test]
    fn test_error_code_try_from() {
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::RoomAlreadyCheckedIn));
        assert_eq!(ErrorCode::try_from(5003), Ok(ErrorCode::AssignmentRequired));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_error_code_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::SlotClosed).unwrap();
        assert_eq!(json, "4004");

        let code: ErrorCode = serde_json::from_str("2010").unwrap();
        assert_eq!(code, ErrorCode::CheckoutNotPermitted);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::NotCheckedIn.to_string(), "4003");
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
