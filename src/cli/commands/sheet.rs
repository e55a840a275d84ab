use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::log_sheet_svg;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::ui::messages;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet { file, id, out } = cmd {
        let logs = DailyLog::load_all(Path::new(file))?;
        let log = DailyLog::find(&logs, id)?;

        let svg = log_sheet_svg(log, &cfg.sheet_layout())?;

        match out {
            Some(path) => {
                fs::write(path, svg)?;
                messages::success(format!(
                    "Log sheet #{} ({}) written to {}",
                    log.id,
                    log.date_str(),
                    path
                ));
            }
            None => print!("{}", svg),
        }
    }
    Ok(())
}
