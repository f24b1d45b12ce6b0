//! Configuration loading and config file resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "WARDROBE_CONFIG";

/// Logging section of the TOML config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Output section of the TOML config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Run detectors concurrently
    pub parallel: bool,
}

/// TOML configuration file contents
///
/// Every section is optional; missing keys fall back to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl TomlConfig {
    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Load config from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

/// Config file resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. Platform config directory
/// 4. Compiled defaults (no file)
pub struct ConfigResolver {
    env_var_name: String,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self {
            env_var_name: CONFIG_ENV_VAR.to_string(),
        }
    }

    /// Resolver reading a different environment variable (used by tests)
    pub fn with_env_var(env_var_name: &str) -> Self {
        Self {
            env_var_name: env_var_name.to_string(),
        }
    }

    /// Locate the config file, if any
    ///
    /// Explicitly named files (argument or environment) are returned even if
    /// they do not exist so that loading reports the mistake. The platform
    /// default is only returned when present.
    pub fn resolve_path(&self, cli_arg: Option<&Path>) -> Option<PathBuf> {
        // Priority 1: Command-line argument
        if let Some(path) = cli_arg {
            return Some(path.to_path_buf());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(&self.env_var_name) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        // Priority 3: Platform config directory
        default_config_path().filter(|path| path.exists())
    }

    /// Resolve and load configuration, returning the file it came from
    ///
    /// A missing platform config is not an error: defaults are used and the
    /// returned path is `None`. An explicitly named file that cannot be read
    /// or parsed is an error.
    ///
    /// Nothing is logged here because callers load config before the
    /// subscriber exists; they report the returned path once it does.
    pub fn load(&self, cli_arg: Option<&Path>) -> Result<(TomlConfig, Option<PathBuf>)> {
        match self.resolve_path(cli_arg) {
            Some(path) => Ok((TomlConfig::load(&path)?, Some(path))),
            None => Ok((TomlConfig::default(), None)),
        }
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform config file path: `<config_dir>/wardrobe/continuity.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wardrobe").join("continuity.toml"))
}
