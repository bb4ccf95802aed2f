//! User account wire models

use serde::{Deserialize, Serialize};

/// Account role carried in user rows and access tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Employee,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

/// Public profile (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOut {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_superuser: bool,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
    pub language: String,
    pub timezone: String,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// Login/registration result: token plus the live profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserOut,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: UserOut) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// Partial profile update; unset fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [UserRole::Admin, UserRole::Manager, UserRole::Employee] {
            assert_eq!(UserRole::from_db(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::from_db("superuser"), None);
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, UserRole::Manager);
    }

    #[test]
    fn test_user_update_unset_fields_are_none() {
        let patch: UserUpdate = serde_json::from_str(r#"{"name":"New Name"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("New Name"));
        assert!(patch.role.is_none());
        assert!(patch.is_active.is_none());
    }
}
