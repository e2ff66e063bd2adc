//! Endpoint catalogue
//!
//! Every backend endpoint is one request type implementing [`ApiRequest`].
//! The type carries its HTTP method, its path relative to the API base and
//! the type the response body decodes into. Fields that only appear in the
//! path or the query string are `#[serde(skip)]`, so the JSON body of
//! `POST`/`PUT` requests is exactly what the backend expects.

use crate::date::DateRange;
use crate::{
    Attendance, AttendanceAlert, AttendanceStats, CreateLeaveRequest, Employee, EmployeeFile,
    EmployeeInput, LeaveDecision, LeaveRequest, LeaveType, LoginRequest, LoginResponse,
    PaginatedResponse, Position, PositionInput, PreviewUrl, RegisterRequest, WorkMode,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether the request type itself is sent as the JSON body.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Path relative to the API base, starting with `/`.
    fn path(&self) -> String;
    /// Query string pairs, unencoded.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Response of endpoints whose body the client does not read.
pub type Ack = IgnoredAny;

// =========================================================
// Resource roots
// =========================================================

pub const AUTH: &str = "/auth";
pub const EMPLOYEES: &str = "/Employees";
pub const POSITIONS: &str = "/Positions";
pub const ATTENDANCE: &str = "/Attendance";
pub const ATTENDANCE_ALERTS: &str = "/AttendanceAlerts";
pub const LEAVE: &str = "/Leave";
pub const FILE_STORAGE: &str = "/filestorage";

fn page_query(page_number: u32, page_size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("pageNumber", page_number.to_string()),
        ("pageSize", page_size.to_string()),
    ]
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{AUTH}/login")
    }
}

impl ApiRequest for RegisterRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{AUTH}/register")
    }
}

// =========================================================
// Employees
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListEmployees {}

impl ApiRequest for ListEmployees {
    type Response = Vec<Employee>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        EMPLOYEES.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct GetEmployee {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for GetEmployee {
    type Response = Employee;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{EMPLOYEES}/{}", self.id)
    }
}

/// Profile of the employee behind the bearer token.
#[derive(Debug, Serialize)]
pub struct GetMyProfile {}

impl ApiRequest for GetMyProfile {
    type Response = Employee;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{EMPLOYEES}/me")
    }
}

impl ApiRequest for EmployeeInput {
    type Response = Employee;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        EMPLOYEES.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateEmployee {
    #[serde(skip)]
    pub id: u32,
    #[serde(flatten)]
    pub input: EmployeeInput,
}

impl ApiRequest for UpdateEmployee {
    type Response = Employee;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("{EMPLOYEES}/{}", self.id)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteEmployee {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DeleteEmployee {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("{EMPLOYEES}/{}", self.id)
    }
}

// =========================================================
// Positions
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListPositions {}

impl ApiRequest for ListPositions {
    type Response = Vec<Position>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        POSITIONS.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct ListPositionsPage {
    #[serde(skip)]
    pub page_number: u32,
    #[serde(skip)]
    pub page_size: u32,
}

impl ApiRequest for ListPositionsPage {
    type Response = PaginatedResponse<Position>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{POSITIONS}/paginated")
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(self.page_number, self.page_size)
    }
}

#[derive(Debug, Serialize)]
pub struct GetPosition {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for GetPosition {
    type Response = Position;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{POSITIONS}/{}", self.id)
    }
}

impl ApiRequest for PositionInput {
    type Response = Position;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        POSITIONS.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatePosition {
    #[serde(skip)]
    pub id: u32,
    #[serde(flatten)]
    pub input: PositionInput,
}

impl ApiRequest for UpdatePosition {
    type Response = Position;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("{POSITIONS}/{}", self.id)
    }
}

#[derive(Debug, Serialize)]
pub struct DeletePosition {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DeletePosition {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("{POSITIONS}/{}", self.id)
    }
}

// =========================================================
// Attendance
// =========================================================

#[derive(Debug, Serialize)]
pub struct MyAttendance {
    #[serde(skip)]
    pub range: DateRange,
}

impl ApiRequest for MyAttendance {
    type Response = Vec<Attendance>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/me")
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        self.range.to_query()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockIn {
    pub work_mode: WorkMode,
}

impl ApiRequest for ClockIn {
    type Response = Attendance;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/clock-in")
    }
}

#[derive(Debug, Serialize)]
pub struct ClockOut {}

impl ApiRequest for ClockOut {
    type Response = Attendance;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/clock-out")
    }
}

#[derive(Debug, Serialize)]
pub struct StartBreak {}

impl ApiRequest for StartBreak {
    type Response = Attendance;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/break/start")
    }
}

#[derive(Debug, Serialize)]
pub struct EndBreak {}

impl ApiRequest for EndBreak {
    type Response = Attendance;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/break/end")
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitDailyReport {
    pub report: String,
}

impl ApiRequest for SubmitDailyReport {
    type Response = Attendance;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/daily-report")
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeAttendance {
    #[serde(skip)]
    pub employee_id: u32,
    #[serde(skip)]
    pub range: DateRange,
}

impl ApiRequest for EmployeeAttendance {
    type Response = Vec<Attendance>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/employee/{}", self.employee_id)
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        self.range.to_query()
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeStats {
    #[serde(skip)]
    pub employee_id: u32,
    #[serde(skip)]
    pub year: i32,
    #[serde(skip)]
    pub month: u32,
}

impl ApiRequest for EmployeeStats {
    type Response = AttendanceStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{ATTENDANCE}/stats/{}", self.employee_id)
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
        ]
    }
}

// =========================================================
// Attendance alerts
// =========================================================

#[derive(Debug, Serialize)]
pub struct MyAlerts {}

impl ApiRequest for MyAlerts {
    type Response = Vec<AttendanceAlert>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{ATTENDANCE_ALERTS}/my-alerts")
    }
}

#[derive(Debug, Serialize)]
pub struct MarkAlertRead {
    #[serde(skip)]
    pub alert_id: u32,
}

impl ApiRequest for MarkAlertRead {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{ATTENDANCE_ALERTS}/{}/read", self.alert_id)
    }
}

// =========================================================
// Leave
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListLeaveTypes {}

impl ApiRequest for ListLeaveTypes {
    type Response = Vec<LeaveType>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{LEAVE}/types")
    }
}

impl ApiRequest for CreateLeaveRequest {
    type Response = LeaveRequest;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{LEAVE}/request")
    }
}

#[derive(Debug, Serialize)]
pub struct MyLeaveRequests {}

impl ApiRequest for MyLeaveRequests {
    type Response = Vec<LeaveRequest>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{LEAVE}/my-requests")
    }
}

#[derive(Debug, Serialize)]
pub struct PendingLeaveRequests {}

impl ApiRequest for PendingLeaveRequests {
    type Response = Vec<LeaveRequest>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{LEAVE}/pending")
    }
}

/// Approve or reject one request; both go through the same endpoint.
#[derive(Debug, Serialize)]
pub struct DecideLeave {
    #[serde(skip)]
    pub leave_request_id: u32,
    #[serde(flatten)]
    pub decision: LeaveDecision,
}

impl ApiRequest for DecideLeave {
    type Response = LeaveRequest;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("{LEAVE}/{}/approve", self.leave_request_id)
    }
}

// =========================================================
// File storage
// =========================================================

/// Multipart upload endpoint; not expressible as a JSON request.
pub fn upload_file_path() -> String {
    format!("{FILE_STORAGE}/upload")
}

/// Raw download endpoint; the body is the file itself.
pub fn download_file_path(employee_file_id: u32) -> String {
    format!("{FILE_STORAGE}/download/{employee_file_id}")
}

#[derive(Debug, Serialize)]
pub struct ListFiles {
    #[serde(skip)]
    pub page_number: u32,
    #[serde(skip)]
    pub page_size: u32,
}

impl ApiRequest for ListFiles {
    type Response = PaginatedResponse<EmployeeFile>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        FILE_STORAGE.to_string()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        page_query(self.page_number, self.page_size)
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeFiles {
    #[serde(skip)]
    pub employee_id: u32,
}

impl ApiRequest for EmployeeFiles {
    type Response = Vec<EmployeeFile>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{FILE_STORAGE}/employee/{}", self.employee_id)
    }
}

#[derive(Debug, Serialize)]
pub struct PreviewFile {
    #[serde(skip)]
    pub employee_file_id: u32,
}

impl ApiRequest for PreviewFile {
    type Response = PreviewUrl;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("{FILE_STORAGE}/preview/{}", self.employee_file_id)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteFile {
    #[serde(skip)]
    pub employee_file_id: u32,
}

impl ApiRequest for DeleteFile {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("{FILE_STORAGE}/{}", self.employee_file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn path_only_fields_stay_out_of_the_body() {
        let req = UpdateEmployee {
            id: 9,
            input: EmployeeInput {
                name: "Grace".into(),
                email: "grace@example.com".into(),
                position_id: 3,
            },
        };
        assert_eq!(req.path(), "/Employees/9");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "Grace", "email": "grace@example.com", "positionId": 3 })
        );
    }

    #[test]
    fn empty_action_bodies_are_objects() {
        assert_eq!(serde_json::to_string(&ClockOut {}).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&MarkAlertRead { alert_id: 4 }).unwrap(),
            "{}"
        );
    }

    #[test]
    fn decide_leave_targets_approve_endpoint() {
        let req = DecideLeave {
            leave_request_id: 12,
            decision: LeaveDecision::reject("Short staffed"),
        };
        assert_eq!(req.path(), "/Leave/12/approve");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["approve"], false);
        assert_eq!(body["rejectionReason"], "Short staffed");
    }

    #[test]
    fn stats_query_carries_year_and_month() {
        let req = EmployeeStats {
            employee_id: 5,
            year: 2024,
            month: 6,
        };
        assert_eq!(req.path(), "/Attendance/stats/5");
        assert_eq!(
            req.query(),
            vec![("year", "2024".to_string()), ("month", "6".to_string())]
        );
    }

    #[test]
    fn attendance_range_goes_to_query() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let req = MyAttendance {
            range: DateRange::single(day),
        };
        assert_eq!(req.path(), "/Attendance/me");
        assert_eq!(req.query()[0], ("startDate", "2024-01-02".to_string()));
    }

    #[test]
    fn only_write_methods_carry_a_body() {
        assert!(HttpMethod::Post.carries_body());
        assert!(HttpMethod::Put.carries_body());
        assert!(!HttpMethod::Get.carries_body());
        assert!(!HttpMethod::Delete.carries_body());
    }
}
