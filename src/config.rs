use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::pagination::DEFAULT_PAGE_SIZE_OPTIONS;

const CONFIG_FILE: &str = "config.toml";

/// Manages config directory and config file operations
#[derive(Clone)]
pub struct ConfigManager {
    pub(crate) config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager with a custom config directory (primarily for testing)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create a new ConfigManager for the given app name
    pub fn new(app_name: &str) -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| eyre!("Could not determine config directory"))?
            .join(app_name);

        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self, path: &str) -> PathBuf {
        self.config_dir.join(path)
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    pub fn generate_default_config(&self) -> String {
        DEFAULT_CONFIG_TEMPLATE.to_string()
    }

    /// Write the commented default configuration. An existing file is only
    /// replaced when `force` is set.
    pub fn write_default_config(&self, force: bool) -> Result<PathBuf> {
        let config_path = self.config_path(CONFIG_FILE);

        if config_path.exists() && !force {
            return Err(eyre!(
                "Config file already exists at {}. Use --force to overwrite.",
                config_path.display()
            ));
        }

        self.ensure_config_dir()?;
        std::fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;

        Ok(config_path)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Configuration format version (for future compatibility)
    pub version: String,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size_options: Vec<usize>,
    pub clamp_current_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "0.1".to_string(),
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            clamp_current_page: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from all layers (default → user)
    pub fn load(app_name: &str) -> Result<Self> {
        Self::load_from(&ConfigManager::new(app_name)?)
    }

    pub fn load_from(manager: &ConfigManager) -> Result<Self> {
        let mut config = AppConfig::default();
        config.merge(Self::load_user_config(manager)?);
        config.validate()?;
        Ok(config)
    }

    fn load_user_config(manager: &ConfigManager) -> Result<AppConfig> {
        let config_path = manager.config_path(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            eyre!(
                "Failed to read config file at {}: {}",
                config_path.display(),
                e
            )
        })?;

        Self::from_toml_str(&content).map_err(|e| {
            eyre!(
                "Failed to parse config file at {}: {}",
                config_path.display(),
                e
            )
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| eyre!("{}", e))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: AppConfig) {
        if other.version != AppConfig::default().version {
            self.version = other.version;
        }
        self.pagination.merge(other.pagination);
        self.logging.merge(other.logging);
    }

    pub fn validate(&self) -> Result<()> {
        if !self.version.starts_with("0.1") {
            return Err(eyre!(
                "Unsupported config version: {}. Expected 0.1.x",
                self.version
            ));
        }

        if self.pagination.page_size_options.is_empty() {
            return Err(eyre!("page_size_options must list at least one page size"));
        }
        if self.pagination.page_size_options.contains(&0) {
            return Err(eyre!("page_size_options entries must be greater than 0"));
        }

        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            eyre!(
                "Invalid logging level '{}': {}",
                self.logging.level,
                e
            )
        })?;

        Ok(())
    }
}

impl PaginationConfig {
    pub fn merge(&mut self, other: Self) {
        let default = PaginationConfig::default();
        if other.page_size_options != default.page_size_options {
            self.page_size_options = other.page_size_options;
        }
        if other.clamp_current_page != default.clamp_current_page {
            self.clamp_current_page = other.clamp_current_page;
        }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        if other.level != LoggingConfig::default().level {
            self.level = other.level;
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../config/default.toml");
