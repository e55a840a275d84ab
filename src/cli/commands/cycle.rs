use crate::cli::parser::Commands;
use crate::core::cycle::CYCLE_LIMIT_HOURS;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::ui::messages;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Cycle { file } = cmd {
        let logs = DailyLog::load_all(Path::new(file))?;
        let summary = Core::build_cycle_summary(&logs);

        for skipped in &summary.report.skipped {
            messages::warning(format!("Skipped log {}: {}", skipped.id, skipped.reason));
        }

        messages::header("Current Cycle Used");
        println!("{}", summary.usage);
        println!(
            "Logs counted: {} of {}",
            summary.report.counted_logs,
            logs.len()
        );

        if summary.usage.is_over_cycle() {
            messages::warning(format!(
                "Over the {}-hour cycle limit",
                CYCLE_LIMIT_HOURS
            ));
        } else {
            let left = summary.usage.remaining();
            println!("Remaining: {} hrs {} mins", left.hours, left.minutes);
        }
    }
    Ok(())
}
