use super::status_change::StatusChange;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Backend log identifier: numeric or textual, compared as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogId {
    Number(i64),
    Text(String),
}

impl LogId {
    pub fn matches(&self, query: &str) -> bool {
        self.to_string() == query.trim()
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogId::Number(n) => write!(f, "{}", n),
            LogId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: LogId,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default)]
    pub status_changes: Vec<StatusChange>, // chronological
}

impl DailyLog {
    pub fn new(id: LogId, date: NaiveDate, status_changes: Vec<StatusChange>) -> Self {
        Self {
            id,
            date,
            status_changes,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Decode a log collection as returned by the backend (JSON array).
    pub fn from_json_str(content: &str) -> AppResult<Vec<DailyLog>> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a log collection from a JSON file.
    pub fn load_all(path: &Path) -> AppResult<Vec<DailyLog>> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn find<'a>(logs: &'a [DailyLog], id: &str) -> AppResult<&'a DailyLog> {
        logs.iter()
            .find(|l| l.id.matches(id))
            .ok_or_else(|| AppError::LogNotFound(id.to_string()))
    }
}
