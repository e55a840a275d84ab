//! Duty-status timeline: status changes → step-function points over one day.
//!
//! The day is assumed to start OFF duty at 00:00 and the last recorded
//! status is held until the end of the day. Only the time-of-day of each
//! timestamp is used for placement, so callers pass one day's changes at
//! a time.

use crate::errors::AppResult;
use crate::models::duty_status::DutyStatus;
use crate::models::status_change::StatusChange;
use crate::utils::time::{MINUTES_IN_DAY, minute_of_day};

/// Drawing area of one log sheet row group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineDomain {
    /// Horizontal extent covering exactly 24 hours.
    pub width: f64,
    /// Vertical spacing between lane center lines.
    pub row_height: f64,
}

impl TimelineDomain {
    pub fn new(width: f64, row_height: f64) -> Self {
        Self { width, row_height }
    }

    pub fn x_for_minute(&self, minute: i64) -> f64 {
        (minute as f64 / MINUTES_IN_DAY as f64) * self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Pen placed at midnight.
    Start,
    /// Horizontal run: status held up to `x`.
    Hold,
    /// Vertical jump at `x` into a new lane.
    Transition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePoint {
    pub x: f64,
    pub lane: DutyStatus,
    pub kind: StepKind,
}

/// Drawing instruction in sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

/// Validated status change, placed on the x axis.
struct Placed {
    x: f64,
    status: DutyStatus,
}

fn place(events: &[StatusChange], domain: &TimelineDomain) -> AppResult<Vec<Placed>> {
    events
        .iter()
        .map(|ev| {
            let status = ev.duty_status()?;
            let ts = ev.parsed_timestamp()?;
            Ok(Placed {
                x: domain.x_for_minute(minute_of_day(&ts)),
                status,
            })
        })
        .collect()
}

/// Build the step-function points for one day of status changes.
///
/// An empty input yields no points. Any unknown status or unparsable
/// timestamp fails the whole call.
pub fn build_timeline(
    events: &[StatusChange],
    domain: &TimelineDomain,
) -> AppResult<Vec<TimelinePoint>> {
    let placed = place(events, domain)?;

    let Some(first) = placed.first() else {
        return Ok(Vec::new());
    };

    let mut points = Vec::with_capacity(2 * placed.len() + 2);

    // -----------------------------
    // Assumed OFF from midnight
    // -----------------------------
    points.push(TimelinePoint {
        x: 0.0,
        lane: DutyStatus::OffDuty,
        kind: StepKind::Start,
    });
    points.push(TimelinePoint {
        x: first.x,
        lane: DutyStatus::OffDuty,
        kind: StepKind::Hold,
    });
    // drop into the first recorded lane, zero height when it is OFF
    points.push(TimelinePoint {
        x: first.x,
        lane: first.status,
        kind: StepKind::Transition,
    });

    // -----------------------------
    // Recorded changes
    // -----------------------------
    for w in placed.windows(2) {
        let (current, next) = (&w[0], &w[1]);

        points.push(TimelinePoint {
            x: next.x,
            lane: current.status,
            kind: StepKind::Hold,
        });
        // emitted even when the lane does not change
        points.push(TimelinePoint {
            x: next.x,
            lane: next.status,
            kind: StepKind::Transition,
        });
    }

    // -----------------------------
    // Last status held to end of day
    // -----------------------------
    if let Some(last) = placed.last() {
        points.push(TimelinePoint {
            x: domain.width,
            lane: last.status,
            kind: StepKind::Hold,
        });
    }

    Ok(points)
}

/// Map timeline points to drawing instructions.
pub fn to_path_commands(points: &[TimelinePoint], domain: &TimelineDomain) -> Vec<PathCommand> {
    points
        .iter()
        .map(|p| {
            let y = p.lane.lane_center(domain.row_height);
            match p.kind {
                StepKind::Start => PathCommand::MoveTo { x: p.x, y },
                StepKind::Hold | StepKind::Transition => PathCommand::LineTo { x: p.x, y },
            }
        })
        .collect()
}

/// Drawing instructions for one day of status changes.
pub fn timeline_path(
    events: &[StatusChange],
    domain: &TimelineDomain,
) -> AppResult<Vec<PathCommand>> {
    let points = build_timeline(events, domain)?;
    Ok(to_path_commands(&points, domain))
}
