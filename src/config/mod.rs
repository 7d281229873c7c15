use crate::errors::{AppError, AppResult};
use crate::models::geometry::DialGeometry;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: String,
    #[serde(default = "default_sleep_start")]
    pub sleep_start: String,
    #[serde(default = "default_sleep_end")]
    pub sleep_end: String,
    #[serde(default = "default_show_sleep")]
    pub show_sleep: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub dial: DialGeometry,
}

fn default_sleep_start() -> String {
    "23:00".to_string()
}
fn default_sleep_end() -> String {
    "07:00".to_string()
}
fn default_show_sleep() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_catalog(Self::catalog_file())
    }
}

impl Config {
    fn with_catalog(catalog: PathBuf) -> Self {
        Self {
            catalog: catalog.to_string_lossy().to_string(),
            sleep_start: default_sleep_start(),
            sleep_end: default_sleep_end(),
            show_sleep: default_show_sleep(),
            log_level: default_log_level(),
            dial: DialGeometry::default(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("daydial")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".daydial")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("daydial.conf")
    }

    /// Return the default path of the event catalog
    pub fn catalog_file() -> PathBuf {
        Self::config_dir().join("daydial.json")
    }

    pub fn log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Catalog path with `~/` expanded.
    pub fn catalog_path(&self) -> PathBuf {
        expand_tilde(&self.catalog)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration file and return the config to use.
    ///
    /// A relative `custom_catalog` is resolved inside the config directory.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_catalog: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let catalog = match custom_catalog {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::catalog_file(),
        };

        let config = Self::with_catalog(catalog);

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save()?;
        }

        Ok(config)
    }
}
