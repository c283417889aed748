// init_config.rs
// Loads and validates the startup configuration from charge_field.toml

use crate::config::AppConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "charge_field.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if given. Without a path, read `charge_field.toml` from the
    /// working directory when present and fall back to defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            info!(path = %path.display(), "loading config");
            return Self::load_from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            info!(path = DEFAULT_CONFIG_FILE, "loading config");
            Self::load_from_file(default_path)
        } else {
            warn!("{} not found, using built-in defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return invalid("canvas width and height must be positive");
        }
        if self.grid.x_count == 0 || self.grid.y_count == 0 {
            return invalid("grid counts must be at least 1");
        }
        if !(self.arrows.length > 0.0) {
            return invalid("arrow length must be positive");
        }
        if !(self.arrows.head_size > 0.0) {
            return invalid("arrow head size must be positive");
        }
        if !self.arrows.gain.is_finite() || !self.arrows.exponent.is_finite() {
            return invalid("arrow gain and exponent must be finite");
        }
        if let Some(initial) = &self.initial {
            let bad = initial
                .iter()
                .any(|c| !c.value.is_finite() || !c.x.is_finite() || !c.y.is_finite());
            if bad {
                return invalid("initial charges must have finite value and position");
            }
        }
        Ok(())
    }
}
