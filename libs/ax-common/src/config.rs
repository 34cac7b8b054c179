//! Tool configuration
//!
//! Layered with figment, lowest priority first:
//! 1. Built-in defaults
//! 2. YAML file (`axlink.yaml` in the working directory, or an explicit path)
//! 3. `AXLINK_` environment variables, nested with `__`
//!    (e.g. `AXLINK_LOGGING__LEVEL=debug`)

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CommonError, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "axlink.yaml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AXLINK_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub framing: FramingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "info,ax_wire=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the bracketed text format
    #[serde(default)]
    pub json: bool,

    /// Colour log levels; defaults to whether stderr is a terminal
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colour non-demo output
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Largest frame payload the stream parser accepts, in bytes
    #[serde(default = "default_max_payload")]
    pub max_payload: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_ansi() -> bool {
    std::io::stderr().is_terminal()
}

fn default_max_payload() -> usize {
    1024 * 1024
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            ansi: default_ansi(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            max_payload: default_max_payload(),
        }
    }
}

impl AppConfig {
    /// Assemble the figment for an optional explicit config path
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let file: PathBuf = match path {
            Some(p) if !p.exists() => {
                return Err(CommonError::config(format!(
                    "config file not found: {}",
                    p.display()
                )))
            },
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        debug!("Loading configuration from {}", file.display());

        Ok(Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration from defaults, file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: AppConfig = Self::figment(path)?
            .extract()
            .map_err(|e| CommonError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.framing.max_payload == 0 {
            return Err(CommonError::InvalidConfig {
                field: "framing.max_payload".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(CommonError::InvalidConfig {
                field: "logging.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
