//! Logged-span aggregation across a collection of daily logs.
//!
//! Each log contributes the wall-clock span between its first and last
//! status change, whatever statuses occupy it. The span may cross
//! midnight. Logs with fewer than two changes contribute nothing.

use crate::errors::AppResult;
use crate::models::daily_log::{DailyLog, LogId};
use chrono::TimeDelta;
use serde::Serialize;

/// Whole hours and remaining minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CycleDuration {
    pub hours: i64,
    pub minutes: i64, // 0..60
}

impl CycleDuration {
    pub fn from_total_minutes(total: i64) -> Self {
        Self {
            hours: total.div_euclid(60),
            minutes: total.rem_euclid(60),
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    pub fn total_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }
}

/// A log left out of the total, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLog {
    pub id: LogId,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationReport {
    pub total: CycleDuration,
    pub counted_logs: usize,
    pub skipped: Vec<SkippedLog>,
}

/// Span between first and last status change, or `None` when the log has
/// fewer than two changes.
pub fn log_span(log: &DailyLog) -> AppResult<Option<TimeDelta>> {
    let changes = &log.status_changes;
    if changes.len() < 2 {
        return Ok(None);
    }

    let start = changes[0].parsed_timestamp()?;
    let end = changes[changes.len() - 1].parsed_timestamp()?;

    Ok(Some(end - start))
}

/// Sum logged spans over `logs`.
///
/// Logs whose first or last timestamp cannot be parsed, or whose last
/// change precedes the first, are skipped and reported; the rest are
/// still counted.
pub fn aggregate_duration(logs: &[DailyLog]) -> DurationReport {
    let mut total = TimeDelta::zero();
    let mut counted_logs = 0;
    let mut skipped = Vec::new();

    for log in logs {
        match log_span(log) {
            Ok(None) => {}
            Ok(Some(span)) if span < TimeDelta::zero() => {
                tracing::warn!(log_id = %log.id, "last status change precedes the first");
                skipped.push(SkippedLog {
                    id: log.id.clone(),
                    reason: "last status change precedes the first".to_string(),
                });
            }
            Ok(Some(span)) => {
                total += span;
                counted_logs += 1;
            }
            Err(e) => {
                tracing::warn!(log_id = %log.id, error = %e, "invalid start/end in log");
                skipped.push(SkippedLog {
                    id: log.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    DurationReport {
        total: CycleDuration::from_total_minutes(total.num_minutes()),
        counted_logs,
        skipped,
    }
}
