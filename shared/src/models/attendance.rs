//! Attendance wire models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Create attendance payload (one record per employee per day)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee_id: String,
    pub attendance_date: NaiveDate,
    /// Check-in timestamp (UTC millis)
    pub check_in: Option<i64>,
    /// Check-out timestamp (UTC millis)
    pub check_out: Option<i64>,
    #[serde(default = "default_true")]
    pub is_present: bool,
    #[serde(default)]
    pub is_late: bool,
    #[serde(default)]
    pub is_half_day: bool,
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Partial attendance update; unset fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub check_in: Option<i64>,
    pub check_out: Option<i64>,
    pub worked_hours: Option<Decimal>,
    pub overtime_hours: Option<Decimal>,
    pub is_present: Option<bool>,
    pub is_late: Option<bool>,
    pub is_half_day: Option<bool>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_flag_defaults() {
        let payload: AttendanceCreate = serde_json::from_str(
            r#"{
                "employee_id": "e-1",
                "attendance_date": "2026-08-03",
                "check_in": null,
                "check_out": null,
                "notes": null
            }"#,
        )
        .unwrap();
        assert!(payload.is_present);
        assert!(!payload.is_late);
        assert!(!payload.is_half_day);
    }
}
