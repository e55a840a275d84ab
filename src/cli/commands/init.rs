use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::init_at(path)?;
    messages::success(format!("Config file: {}", path.display()));
    Ok(())
}
