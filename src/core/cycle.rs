//! Cycle usage: aggregated duty span against the 80-hour ceiling.

use crate::core::calculator::duration::CycleDuration;
use serde::Serialize;
use std::fmt;

/// Fixed policy ceiling for the cycle, in hours.
pub const CYCLE_LIMIT_HOURS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleUsage {
    pub used: CycleDuration,
    /// Not clamped: values above 100 signal an over-cycle condition.
    pub percent: f64,
}

impl CycleUsage {
    pub fn from_duration(used: CycleDuration) -> Self {
        Self {
            used,
            percent: used.total_hours() / CYCLE_LIMIT_HOURS * 100.0,
        }
    }

    pub fn is_over_cycle(&self) -> bool {
        self.percent > 100.0
    }

    pub fn remaining(&self) -> CycleDuration {
        let limit = (CYCLE_LIMIT_HOURS * 60.0) as i64;
        CycleDuration::from_total_minutes((limit - self.used.total_minutes()).max(0))
    }
}

impl fmt::Display for CycleUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hrs {} mins ({:.1}%)",
            self.used.hours, self.used.minutes, self.percent
        )
    }
}
