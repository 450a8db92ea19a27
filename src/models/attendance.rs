use serde::{Deserialize, Serialize};

use crate::error::RowError;

/// How the `Attended` column is spelled in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendedLabels {
    #[default]
    CompletedPending,
    YesNo,
}

impl AttendedLabels {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendedLabels::CompletedPending => "completed-pending",
            AttendedLabels::YesNo => "yes-no",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed-pending" => Some(AttendedLabels::CompletedPending),
            "yes-no" => Some(AttendedLabels::YesNo),
            _ => None,
        }
    }

    pub fn label(&self, attended: bool) -> &'static str {
        match (self, attended) {
            (AttendedLabels::CompletedPending, true) => "Completed",
            (AttendedLabels::CompletedPending, false) => "Pending",
            (AttendedLabels::YesNo, true) => "Yes",
            (AttendedLabels::YesNo, false) => "No",
        }
    }
}

/// Reads any of the spellings a report may use for the `Attended` column.
pub fn parse_attended(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "completed" | "yes" | "true" => Some(true),
        "pending" | "no" | "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub member_id: i64,
    pub session_id: i64,
    pub attended: bool,
}

impl AttendanceRecord {
    pub fn new(member_id: i64, session_id: i64, attended: bool) -> Self {
        Self {
            id: None,
            member_id,
            session_id,
            attended,
        }
    }

    pub fn validate(&self) -> Result<(), RowError> {
        if self.member_id <= 0 {
            return Err(RowError::Validation(format!(
                "member id must be positive, got {}",
                self.member_id
            )));
        }
        if self.session_id <= 0 {
            return Err(RowError::Validation(format!(
                "session id must be positive, got {}",
                self.session_id
            )));
        }
        Ok(())
    }
}
