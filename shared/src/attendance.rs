//! Attendance records, statistics and alerts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkMode {
    #[default]
    #[serde(rename = "In-Office")]
    InOffice,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::InOffice, WorkMode::Remote, WorkMode::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::InOffice => "In-Office",
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

/// One attendance day of one employee.
///
/// Timestamps stay as the strings the server sent; the client only checks
/// their presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub attendance_id: u32,
    pub employee_id: u32,
    #[serde(default)]
    pub employee_name: String,
    pub date: String,
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_start: Option<String>,
    #[serde(default)]
    pub break_end: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub work_mode: String,
    #[serde(default)]
    pub daily_report: Option<String>,
    #[serde(default)]
    pub daily_report_submitted: bool,
    #[serde(default)]
    pub total_work_hours: Option<String>,
}

impl Attendance {
    pub fn is_clocked_in(&self) -> bool {
        self.clock_in.is_some()
    }

    pub fn is_clocked_out(&self) -> bool {
        self.clock_out.is_some()
    }

    /// A break has started and not ended yet.
    pub fn is_on_break(&self) -> bool {
        self.break_start.is_some() && self.break_end.is_none()
    }

    pub fn can_clock_out(&self) -> bool {
        self.is_clocked_in() && !self.is_clocked_out()
    }

    pub fn can_start_break(&self) -> bool {
        self.can_clock_out() && !self.is_on_break()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceStats {
    pub total_days: u32,
    pub present_days: u32,
    pub absent_days: u32,
    pub late_days: u32,
    pub leave_days: u32,
    pub attendance_percentage: f64,
    pub report_submission_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceAlert {
    pub alert_id: u32,
    pub employee_id: u32,
    #[serde(default)]
    pub employee_name: String,
    pub alert_type: String,
    pub message: String,
    #[serde(default)]
    pub alert_date: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Attendance {
        serde_json::from_value(serde_json::json!({
            "attendanceId": 1,
            "employeeId": 7,
            "date": "2024-05-02",
            "clockIn": "2024-05-02T09:01:00"
        }))
        .unwrap()
    }

    #[test]
    fn break_state_follows_timestamps() {
        let mut a = record();
        assert!(a.can_clock_out());
        assert!(a.can_start_break());
        assert!(!a.is_on_break());

        a.break_start = Some("2024-05-02T12:00:00".into());
        assert!(a.is_on_break());
        assert!(!a.can_start_break());

        a.break_end = Some("2024-05-02T12:30:00".into());
        assert!(!a.is_on_break());

        a.clock_out = Some("2024-05-02T18:00:00".into());
        assert!(!a.can_clock_out());
        assert!(!a.can_start_break());
    }

    #[test]
    fn work_mode_uses_backend_spelling() {
        assert_eq!(
            serde_json::to_string(&WorkMode::InOffice).unwrap(),
            "\"In-Office\""
        );
        assert_eq!(WorkMode::parse("Remote"), Some(WorkMode::Remote));
        assert_eq!(WorkMode::parse("remote"), None);
    }
}
