use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::chart::DisplayWindow;
use crate::errors::{AppError, AppResult};
use crate::utils::path::default_export_dir;
use crate::utils::time::parse_duration_ms;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_csv_separator")]
    pub csv_separator: String,
    #[serde(default = "default_chart_window_start")]
    pub chart_window_start: String,
    #[serde(default = "default_chart_window_end")]
    pub chart_window_end: String,
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    #[serde(default = "default_export_dir_string")]
    pub export_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_csv_separator() -> String {
    ",".to_string()
}
fn default_chart_window_start() -> String {
    "05:30".to_string()
}
fn default_chart_window_end() -> String {
    "18:30".to_string()
}
fn default_chart_days() -> u32 {
    7
}
fn default_daily_target() -> String {
    "8h45m".to_string()
}
fn default_refresh_interval_ms() -> u64 {
    200
}
fn default_export_dir_string() -> String {
    default_export_dir().to_string_lossy().to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            csv_separator: default_csv_separator(),
            chart_window_start: default_chart_window_start(),
            chart_window_end: default_chart_window_end(),
            chart_days: default_chart_days(),
            daily_target: default_daily_target(),
            refresh_interval_ms: default_refresh_interval_ms(),
            export_dir: default_export_dir_string(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkday")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkday")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkday.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkday.sqlite")
    }

    /// Parse a YAML document; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn chart_window(&self) -> AppResult<DisplayWindow> {
        DisplayWindow::parse(&self.chart_window_start, &self.chart_window_end)
    }

    pub fn daily_target_ms(&self) -> AppResult<i64> {
        parse_duration_ms(&self.daily_target)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.max(1))
    }

    /// Semantic checks beyond what YAML parsing catches.
    pub fn validate(&self) -> AppResult<()> {
        self.chart_window()?;
        self.daily_target_ms()?;
        crate::export::csv::separator_byte(&self.csv_separator)?;
        if self.chart_days == 0 {
            return Err(AppError::Config("chart_days must be at least 1".into()));
        }
        Ok(())
    }

    /// Create the config file (unless `is_test`) and an empty database
    /// file. Returns the database path.
    pub fn init_all(db_override: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match db_override {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
