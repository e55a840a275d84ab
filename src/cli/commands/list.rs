use crate::cli::parser::Commands;
use crate::core::calculator::duration::log_span;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::List { file } = cmd {
        let logs = DailyLog::load_all(Path::new(file))?;

        if logs.is_empty() {
            println!("No logs in {}", file);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("Date"),
            Column::new("Log Updates"),
            Column::new("Span"),
        ]);

        for log in &logs {
            let span = match log_span(log) {
                Ok(Some(d)) => format_minutes(d.num_minutes()),
                Ok(None) => "--:--".to_string(),
                Err(_) => "invalid".to_string(),
            };
            table.add_row(vec![
                log.id.to_string(),
                log.date_str(),
                log.status_changes.len().to_string(),
                span,
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
