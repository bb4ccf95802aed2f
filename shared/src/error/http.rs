//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::UserNotFound
            | Self::DepartmentNotFound
            | Self::EmployeeNotFound
            | Self::AttendanceNotFound
            | Self::LeaveRequestNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::EmailAlreadyRegistered
            | Self::DepartmentNameExists
            | Self::DepartmentCodeExists
            | Self::EmployeeNumberExists
            | Self::EmployeeUserExists
            | Self::AttendanceDateExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden (account state refusals carry a valid identity)
            Self::AccountLocked
            | Self::AccountDisabled
            | Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 429 Too Many Requests
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::LeaveRequestNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::EmailAlreadyRegistered.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::EmployeeNumberExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::AttendanceDateExists.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::TokenExpired.http_status(),
            StatusCode::UNAUTHORIZED
        );
        // Lockout and deactivation only fire once identity is known
        assert_eq!(
            ErrorCode::AccountLocked.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::AccountDisabled.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_default_bad_request() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::PasswordTooShort.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::LeaveDatesInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
