//! Department wire models

use serde::{Deserialize, Serialize};

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    pub code: Option<String>,
    pub parent_id: Option<String>,
    pub manager_id: Option<String>,
    pub description: Option<String>,
}

/// Partial department update; unset fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub parent_id: Option<String>,
    pub manager_id: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
