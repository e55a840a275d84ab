use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::timeline::TimelineDomain;
use crate::core::logic::Core;
use crate::core::render::generate_timeline_path;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::ui::messages;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Path {
        file,
        id,
        width,
        row_height,
    } = cmd
    {
        let logs = DailyLog::load_all(Path::new(file))?;

        let default_domain = cfg.sheet_layout().domain();
        let domain = TimelineDomain::new(
            width.unwrap_or(default_domain.width),
            row_height.unwrap_or(default_domain.row_height),
        );

        // ---- SINGLE LOG ----
        if let Some(id) = id {
            let log = DailyLog::find(&logs, id)?;
            println!("{}", generate_timeline_path(&log.status_changes, &domain)?);
            return Ok(());
        }

        // ---- ALL LOGS ----
        let mut failed = 0;
        for (log_id, d) in Core::build_paths(&logs, &domain) {
            match d {
                Ok(d) => println!("{}\t{}", log_id, d),
                Err(e) => {
                    failed += 1;
                    messages::warning(format!("log {}: {}", log_id, e));
                }
            }
        }

        if failed > 0 {
            return Err(AppError::Other(format!(
                "{} log(s) could not be drawn",
                failed
            )));
        }
    }
    Ok(())
}
