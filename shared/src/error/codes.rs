//! Unified error codes for the HR backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User account errors
//! - 4xxx: Department errors
//! - 5xxx: Employee errors
//! - 6xxx: Attendance errors
//! - 7xxx: Leave request errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript, etc.)
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

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is locked after repeated failed logins
    AccountLocked = 1005,
    /// Account is deactivated
    AccountDisabled = 1006,
    /// Email already belongs to a registered account
    EmailAlreadyRegistered = 1007,
    /// Password too short
    PasswordTooShort = 1008,
    /// Too many requests from this client
    TooManyRequests = 1009,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,

    // ==================== 4xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 4001,
    /// Department name already exists
    DepartmentNameExists = 4002,
    /// Department code already exists
    DepartmentCodeExists = 4003,

    // ==================== 5xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 5001,
    /// Employee number already exists
    EmployeeNumberExists = 5002,
    /// User already linked to an employee record
    EmployeeUserExists = 5003,

    // ==================== 6xxx: Attendance ====================
    /// Attendance record not found
    AttendanceNotFound = 6001,
    /// Attendance record for this date already exists
    AttendanceDateExists = 6002,

    // ==================== 7xxx: Leave ====================
    /// Leave request not found
    LeaveRequestNotFound = 7001,
    /// Leave date range or day count is invalid
    LeaveDatesInvalid = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountLocked => "Account is temporarily locked",
            ErrorCode::AccountDisabled => "Account is deactivated",
            ErrorCode::EmailAlreadyRegistered => "Email already registered",
            ErrorCode::PasswordTooShort => "Password must be at least 8 characters",
            ErrorCode::TooManyRequests => "Too many requests, try again later",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // User
            ErrorCode::UserNotFound => "User not found",

            // Department
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::DepartmentNameExists => "Department name already exists",
            ErrorCode::DepartmentCodeExists => "Department code already exists",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeNumberExists => "Employee number already exists",
            ErrorCode::EmployeeUserExists => "User is already linked to an employee record",

            // Attendance
            ErrorCode::AttendanceNotFound => "Attendance record not found",
            ErrorCode::AttendanceDateExists => "Attendance record for this date already exists",

            // Leave
            ErrorCode::LeaveRequestNotFound => "Leave request not found",
            ErrorCode::LeaveDatesInvalid => "Leave date range or day count is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
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

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::AccountLocked),
            1006 => Ok(ErrorCode::AccountDisabled),
            1007 => Ok(ErrorCode::EmailAlreadyRegistered),
            1008 => Ok(ErrorCode::PasswordTooShort),
            1009 => Ok(ErrorCode::TooManyRequests),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // User
            3001 => Ok(ErrorCode::UserNotFound),

            // Department
            4001 => Ok(ErrorCode::DepartmentNotFound),
            4002 => Ok(ErrorCode::DepartmentNameExists),
            4003 => Ok(ErrorCode::DepartmentCodeExists),

            // Employee
            5001 => Ok(ErrorCode::EmployeeNotFound),
            5002 => Ok(ErrorCode::EmployeeNumberExists),
            5003 => Ok(ErrorCode::EmployeeUserExists),

            // Attendance
            6001 => Ok(ErrorCode::AttendanceNotFound),
            6002 => Ok(ErrorCode::AttendanceDateExists),

            // Leave
            7001 => Ok(ErrorCode::LeaveRequestNotFound),
            7002 => Ok(ErrorCode::LeaveDatesInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::AccountLocked.code(), 1005);
        assert_eq!(ErrorCode::EmployeeNumberExists.code(), 5002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::InvalidCredentials.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0).unwrap(), ErrorCode::Success);
        assert_eq!(
            ErrorCode::try_from(1005).unwrap(),
            ErrorCode::AccountLocked
        );
        assert_eq!(
            ErrorCode::try_from(6002).unwrap(),
            ErrorCode::AttendanceDateExists
        );
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&ErrorCode::AccountDisabled).unwrap();
        assert_eq!(json, "1006");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::AccountDisabled);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("4242");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::InvalidCredentials.to_string(), "E1002");
        assert_eq!(ErrorCode::InternalError.to_string(), "E9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::EmailAlreadyRegistered.message(),
            "Email already registered"
        );
        assert_eq!(
            ErrorCode::AccountLocked.message(),
            "Account is temporarily locked"
        );
    }
}
