//! Employee wire models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment contract type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Intern => "intern",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "full_time" => Some(Self::FullTime),
            "part_time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "intern" => Some(Self::Intern),
            _ => None,
        }
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    /// Linked user account
    pub user_id: String,
    pub employee_number: String,
    pub department_id: Option<String>,
    pub job_title: Option<String>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    pub joining_date: NaiveDate,
    /// Reporting manager (employee id)
    pub manager_id: Option<String>,
    pub current_salary: Option<Decimal>,
    pub currency: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relation: Option<String>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
}

/// Partial employee update; unset fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub department_id: Option<String>,
    pub job_title: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub manager_id: Option<String>,
    pub current_salary: Option<Decimal>,
    pub annual_leave_balance: Option<Decimal>,
    pub sick_leave_balance: Option<Decimal>,
    pub casual_leave_balance: Option<Decimal>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
    pub is_active: Option<bool>,
    pub resignation_date: Option<NaiveDate>,
    pub last_working_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_roundtrip() {
        for t in [
            EmploymentType::FullTime,
            EmploymentType::PartTime,
            EmploymentType::Contract,
            EmploymentType::Intern,
        ] {
            assert_eq!(EmploymentType::from_db(t.as_str()), Some(t));
        }
        assert_eq!(EmploymentType::from_db("freelance"), None);
    }

    #[test]
    fn test_create_defaults() {
        let payload: EmployeeCreate = serde_json::from_str(
            r#"{
                "user_id": "u-1",
                "employee_number": "EMP-001",
                "joining_date": "2026-01-15",
                "department_id": null,
                "job_title": null,
                "manager_id": null,
                "current_salary": null,
                "currency": null,
                "emergency_contact_name": null,
                "emergency_contact_phone": null,
                "emergency_contact_relation": null,
                "current_address": null,
                "permanent_address": null
            }"#,
        )
        .unwrap();
        assert_eq!(payload.employee_number, "EMP-001");
        assert!(payload.employment_type.is_none());
    }
}
