use crate::image_classifier::interface::Classification;
use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use directories::BaseDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "IMAGE_CLASSIFICATION_CONFIG";
const APP_DIR_NAME: &str = "image-classification";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    #[default]
    Onnx,
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoggerKind {
    #[default]
    Tracing,
    Console,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widths at or below this switch the upload row to a column.
    pub narrow_max_width: f32,
    pub wide_gap: f32,
    pub narrow_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_max_width: 500.0,
            wide_gap: 100.0,
            narrow_gap: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageViewConfig {
    pub max_width: f32,
    pub height: f32,
}

impl Default for ImageViewConfig {
    fn default() -> Self {
        Self {
            max_width: 300.0,
            height: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FakeConfig {
    pub load_delay_ms: u64,
    pub fail_load: bool,
    pub predictions: Option<Vec<Classification>>,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 1500,
            fail_load: false,
            predictions: None,
        }
    }
}

impl FakeConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub layout: LayoutConfig,
    pub image: ImageViewConfig,
    pub classifier: ClassifierKind,
    pub model: ModelConfig,
    pub fake: FakeConfig,
    pub logger: LoggerKind,
    pub logger_utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 700.0,
            layout: LayoutConfig::default(),
            image: ImageViewConfig::default(),
            classifier: ClassifierKind::default(),
            model: ModelConfig::default(),
            fake: FakeConfig::default(),
            logger: LoggerKind::default(),
            logger_utc_offset_hours: 0,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads the file the user asked for, or the per-user config file if it
    /// exists, or falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::load_from(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn logger_timezone(&self) -> chrono::FixedOffset {
        chrono::FixedOffset::east_opt(self.logger_utc_offset_hours * 3600)
            .unwrap_or_else(|| chrono::Utc.fix())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.config_dir()
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

/// First CLI argument wins over the environment variable.
pub fn config_path_from<I>(mut args: I, env_value: Option<String>) -> Option<PathBuf>
where
    I: Iterator<Item = String>,
{
    args.nth(1)
        .or(env_value)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
