//! Employee directory and position (designation) records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position_id: u32,
    #[serde(default)]
    pub position_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Employee {
    pub fn position_label(&self) -> &str {
        self.position_name.as_deref().unwrap_or("N/A")
    }
}

/// Body of employee create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub position_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub position_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Present on the detail endpoint only.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PositionInput {
    /// Trims both fields, dropping a blank description.
    pub fn new(name: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            name: name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}
