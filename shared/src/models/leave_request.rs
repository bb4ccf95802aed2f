//! Leave request wire models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Leave request review state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Create leave request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestCreate {
    pub employee_id: String,
    /// annual, sick, casual, unpaid
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_count: Decimal,
    pub reason: Option<String>,
}

/// Review update: status change and/or rejection reason
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveRequestUpdate {
    pub status: Option<LeaveStatus>,
    pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for s in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
        ] {
            assert_eq!(LeaveStatus::from_db(s.as_str()), Some(s));
        }
        assert_eq!(LeaveStatus::from_db("cancelled"), None);
    }

    #[test]
    fn test_update_deserializes_partial() {
        let patch: LeaveRequestUpdate = serde_json::from_str(r#"{"status":"approved"}"#).unwrap();
        assert_eq!(patch.status, Some(LeaveStatus::Approved));
        assert!(patch.rejection_reason.is_none());
    }
}
