use crate::core::calculator::duration::{self, DurationReport};
use crate::core::calculator::timeline::TimelineDomain;
use crate::core::cycle::CycleUsage;
use crate::core::render;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;

pub struct Core;

/// Aggregated span over a log collection plus its cycle usage.
#[derive(Debug, Clone)]
pub struct CycleSummary {
    pub report: DurationReport,
    pub usage: CycleUsage,
}

impl Core {
    pub fn build_cycle_summary(logs: &[DailyLog]) -> CycleSummary {
        let report = duration::aggregate_duration(logs);
        let usage = CycleUsage::from_duration(report.total);

        CycleSummary { report, usage }
    }

    /// `d` attribute for every log, in input order. Each log succeeds or
    /// fails on its own.
    pub fn build_paths(
        logs: &[DailyLog],
        domain: &TimelineDomain,
    ) -> Vec<(String, AppResult<String>)> {
        logs.iter()
            .map(|log| {
                let d = render::generate_timeline_path(&log.status_changes, domain);
                (log.id.to_string(), d)
            })
            .collect()
    }
}
