//! Employee file storage records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFile {
    pub employee_file_id: u32,
    pub employee_id: u32,
    #[serde(default)]
    pub employee_name: String,
    pub file_storage_id: u32,
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_category: Option<String>,
    #[serde(default)]
    pub file_status: String,
    #[serde(default)]
    pub uploaded_at: String,
    #[serde(default)]
    pub assigned_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewUrl {
    pub url: String,
}
