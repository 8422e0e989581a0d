//! Request payloads for the endpoints that take a body.
//!
//! Every body-taking operation accepts any `Serialize` value, so these types
//! are a convenience rather than a contract. They mirror the backend's
//! `camelCase` JSON.

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::hrms::error::HrmsError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub employee_id: i64,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One employee's attendance status for a bulk save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_id: i64,
    pub status: String,
}

impl AttendanceRecord {
    #[must_use]
    pub fn new(employee_id: i64, status: impl Into<String>) -> Self {
        Self {
            employee_id,
            status: status.into(),
        }
    }
}

/// Per-record result of `AttendanceApi::save_each`.
#[derive(Debug)]
pub struct AttendanceOutcome {
    pub employee_id: i64,
    pub result: Result<StatusCode, HrmsError>,
}

impl AttendanceOutcome {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
