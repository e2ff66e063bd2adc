//! Leave types and leave requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_APPROVED: &str = "Approved";
pub const STATUS_REJECTED: &str = "Rejected";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub leave_type_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub max_days_per_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub leave_request_id: u32,
    pub employee_id: u32,
    #[serde(default)]
    pub employee_name: String,
    pub leave_type_id: u32,
    #[serde(default)]
    pub leave_type_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub reason: String,
    pub status: String,
    #[serde(default)]
    pub approved_by_name: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}

/// Body of `POST /Leave/request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub leave_type_id: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Body of `POST /Leave/{id}/approve`; the same endpoint rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecision {
    pub approve: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl LeaveDecision {
    pub fn approve() -> Self {
        Self {
            approve: true,
            rejection_reason: None,
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            approve: false,
            rejection_reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_serializes_plain_dates() {
        let req = CreateLeaveRequest {
            leave_type_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
            reason: "Family trip".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["leaveTypeId"], 2);
        assert_eq!(json["startDate"], "2024-08-01");
        assert_eq!(json["endDate"], "2024-08-03");
    }

    #[test]
    fn approval_has_no_reason_field() {
        let json = serde_json::to_value(LeaveDecision::approve()).unwrap();
        assert_eq!(json, serde_json::json!({ "approve": true }));

        let json = serde_json::to_value(LeaveDecision::reject("Peak season")).unwrap();
        assert_eq!(json["rejectionReason"], "Peak season");
    }
}
