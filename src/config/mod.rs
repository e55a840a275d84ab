use crate::core::calculator::travel::DEFAULT_AVERAGE_SPEED_KMH;
use crate::core::render::SheetLayout;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_viewbox_width")]
    pub viewbox_width: f64,
    #[serde(default = "default_label_width")]
    pub label_width: f64,
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default = "default_average_speed")]
    pub average_speed_kmh: f64,
}

fn default_viewbox_width() -> f64 {
    1000.0
}
fn default_label_width() -> f64 {
    80.0
}
fn default_row_height() -> f64 {
    50.0
}
fn default_average_speed() -> f64 {
    DEFAULT_AVERAGE_SPEED_KMH
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewbox_width: default_viewbox_width(),
            label_width: default_label_width(),
            row_height: default_row_height(),
            average_speed_kmh: default_average_speed(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hoslog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hoslog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hoslog.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !is_positive(self.row_height) {
            return Err(AppError::Config(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !(self.label_width.is_finite() && self.label_width >= 0.0)
            || !is_positive(self.viewbox_width)
            || self.viewbox_width <= self.label_width
        {
            return Err(AppError::Config(format!(
                "viewbox_width ({}) must exceed label_width ({})",
                self.viewbox_width, self.label_width
            )));
        }
        if !is_positive(self.average_speed_kmh) {
            return Err(AppError::Config(format!(
                "average_speed_kmh must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        Ok(())
    }

    pub fn sheet_layout(&self) -> SheetLayout {
        SheetLayout {
            viewbox_width: self.viewbox_width,
            label_width: self.label_width,
            row_height: self.row_height,
        }
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init_at(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
