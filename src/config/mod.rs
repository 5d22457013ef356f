use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Beyond this gap the next entry no longer continues the previous one.
    #[serde(default = "default_gap_threshold_hours")]
    pub gap_threshold_hours: i64,
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: i64,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
    #[serde(default = "default_sequence_window")]
    pub sequence_window: usize,
    #[serde(default = "default_location_cap")]
    pub location_cap: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_gap_threshold_hours() -> i64 {
    12
}
fn default_duration_minutes() -> i64 {
    30
}
fn default_max_recommendations() -> usize {
    3
}
fn default_sequence_window() -> usize {
    10
}
fn default_location_cap() -> usize {
    3
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            gap_threshold_hours: default_gap_threshold_hours(),
            default_duration_minutes: default_duration_minutes(),
            max_recommendations: default_max_recommendations(),
            sequence_window: default_sequence_window(),
            location_cap: default_location_cap(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rdaylog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdaylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdaylog.conf")
    }

    /// Overrides the data directory; relative paths live under the config dir.
    pub fn set_data_dir(&mut self, dir: &str) {
        let p = expand_tilde(dir);
        self.data_dir = if p.is_absolute() {
            p.to_string_lossy().to_string()
        } else {
            Self::config_dir().join(p).to_string_lossy().to_string()
        };
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn gap_threshold(&self) -> chrono::Duration {
        chrono::Duration::hours(self.gap_threshold_hours)
    }

    pub fn default_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.default_duration_minutes)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Initialize configuration file and data directory
    pub fn init_all(custom_dir: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::load().unwrap_or_default();

        if let Some(dir) = custom_dir {
            config.set_data_dir(dir);
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(config.data_path())?;
        println!("✅ Data dir:    {:?}", config.data_path());

        Ok(config)
    }
}
