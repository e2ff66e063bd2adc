use serde::{Deserialize, Serialize};
use std::fmt;

pub mod attendance;
pub mod date;
pub mod employee;
pub mod files;
pub mod leave;
pub mod protocol;

pub use attendance::{Attendance, AttendanceAlert, AttendanceStats, WorkMode};
pub use date::DateRange;
pub use employee::{Employee, EmployeeInput, Position, PositionInput};
pub use files::{EmployeeFile, PaginatedResponse, PreviewUrl};
pub use leave::{CreateLeaveRequest, LeaveDecision, LeaveRequest, LeaveType};

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// Domain Models
// =========================================================

/// Coarse-grained authorization tag carried in the session.
///
/// `Admin` implicitly satisfies every role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }

    /// Exact, case-sensitive match against the backend's role names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admin" => Some(Role::Admin),
            "Employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// Whether a holder of `self` may enter something that requires `required`.
    pub fn satisfies(&self, required: Role) -> bool {
        *self == required || *self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// Auth DTOs
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by `POST /auth/login`.
///
/// `role` stays a plain string: the session stores whatever the server sent
/// and only interprets it through [`Role::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    /// Only employees belong to a position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u32>,
}

/// Error body produced by the backend (ASP.NET style).
///
/// Either a plain `message`, or a `title` with per-field `errors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub errors: Option<std::collections::BTreeMap<String, Vec<String>>>,
}

impl ServerErrorBody {
    /// Best human-readable message: `message`, then the flattened field
    /// errors, then `title`.
    pub fn best_message(&self) -> Option<String> {
        if let Some(message) = self.message.as_ref().filter(|m| !m.trim().is_empty()) {
            return Some(message.clone());
        }

        if let Some(errors) = &self.errors {
            let flat: Vec<&str> = errors
                .values()
                .flatten()
                .map(String::as_str)
                .filter(|m| !m.trim().is_empty())
                .collect();
            if !flat.is_empty() {
                return Some(flat.join(", "));
            }
        }

        self.title.clone().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_exact() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Employee"), Some(Role::Employee));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn admin_satisfies_everything() {
        assert!(Role::Admin.satisfies(Role::Employee));
        assert!(Role::Admin.satisfies(Role::Admin));
        assert!(Role::Employee.satisfies(Role::Employee));
        assert!(!Role::Employee.satisfies(Role::Admin));
    }

    #[test]
    fn login_response_tolerates_missing_identity_fields() {
        let res: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(res.token, "abc");
        assert!(res.role.is_empty());
        assert!(res.expires_at.is_none());
    }

    #[test]
    fn register_request_omits_position_for_admins() {
        let req = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            role: Role::Admin,
            position_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["confirmPassword"], "secret1");
        assert_eq!(json["role"], "Admin");
        assert!(json.get("positionId").is_none());
    }

    #[test]
    fn server_error_prefers_message_then_errors_then_title() {
        let body: ServerErrorBody =
            serde_json::from_str(r#"{"message":"Already clocked in","title":"Bad"}"#).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("Already clocked in"));

        let body: ServerErrorBody = serde_json::from_str(
            r#"{"title":"One or more validation errors occurred.","errors":{"Email":["Email is required"],"Name":["Name is required"]}}"#,
        )
        .unwrap();
        assert_eq!(
            body.best_message().as_deref(),
            Some("Email is required, Name is required")
        );

        let body: ServerErrorBody = serde_json::from_str(r#"{"title":"Not Found"}"#).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("Not Found"));

        assert_eq!(ServerErrorBody::default().best_message(), None);
    }
}
