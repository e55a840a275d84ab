use super::duty_status::DutyStatus;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One duty-status transition as delivered by the log backend.
///
/// Both fields are kept as received; they are validated by the engines
/// that consume them, so a single bad record never prevents a log
/// collection from being decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: String,    // 'OFF' | 'SB' | 'DR' | 'ON'
    pub timestamp: String, // RFC 3339 or naive "YYYY-MM-DDTHH:MM[:SS]"
}

impl StatusChange {
    pub fn new(status: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn duty_status(&self) -> AppResult<DutyStatus> {
        DutyStatus::from_code(&self.status)
            .ok_or_else(|| AppError::UnknownStatusCode(self.status.clone()))
    }

    pub fn parsed_timestamp(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
            .ok_or_else(|| AppError::MalformedTimestamp(self.timestamp.clone()))
    }
}
