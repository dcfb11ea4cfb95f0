use crate::core::upcoming::DEFAULT_UPCOMING_DAYS;
use crate::errors::{AppError, AppResult};
use crate::offline::CACHE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "default_cache_name")]
    pub cache_name: String,
    #[serde(default = "default_web_root")]
    pub web_root: String,
}

fn default_upcoming_days() -> u32 {
    DEFAULT_UPCOMING_DAYS
}
fn default_cache_dir() -> String {
    Config::config_dir()
        .join("cache")
        .to_string_lossy()
        .to_string()
}
fn default_cache_name() -> String {
    CACHE_NAME.to_string()
}
fn default_web_root() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            upcoming_days: default_upcoming_days(),
            cache_dir: default_cache_dir(),
            cache_name: default_cache_name(),
            web_root: default_web_root(),
        }
    }
}

impl Config {
    /// `~/.superscheduler` (home from the platform, `.` as last resort).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".superscheduler")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("superscheduler.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("superscheduler.sqlite")
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Create the config directory and file. Relative database names are
    /// resolved inside the config directory. In test mode no file is written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
