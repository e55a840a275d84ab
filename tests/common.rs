#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use hoslog::models::daily_log::{DailyLog, LogId};
use hoslog::models::status_change::StatusChange;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hl() -> Command {
    cargo_bin_cmd!("hoslog")
}

/// A config path inside the temp dir that does not exist (defaults apply)
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hoslog.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a uniquely named JSON file in the temp dir
pub fn write_logs(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_logs.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write logs fixture");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two logs: #1 spans 00:00 → 08:30, #2 holds a single change.
pub const SAMPLE_LOGS: &str = r#"[
  {
    "id": 1,
    "date": "2025-03-01",
    "status_changes": [
      {"status": "ON", "timestamp": "2025-03-01T00:00:00"},
      {"status": "DR", "timestamp": "2025-03-01T06:00:00"},
      {"status": "off", "timestamp": "2025-03-01T08:30:00"}
    ]
  },
  {
    "id": 2,
    "date": "2025-03-02",
    "status_changes": [
      {"status": "DR", "timestamp": "2025-03-02T08:00:00"}
    ]
  }
]"#;

pub fn change(status: &str, timestamp: &str) -> StatusChange {
    StatusChange::new(status, timestamp)
}

pub fn log(id: i64, date: &str, changes: Vec<StatusChange>) -> DailyLog {
    DailyLog::new(
        LogId::Number(id),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
        changes,
    )
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
