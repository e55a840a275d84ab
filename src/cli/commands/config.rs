use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if matches!(cmd, Commands::Config { print_config: true }) {
        messages::info(format!("Configuration file: {}", path.display()));
        if !path.exists() {
            messages::warning("file not found, showing defaults");
        }
        print!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}
