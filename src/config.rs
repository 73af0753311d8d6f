use crate::error::{Error, Result};
use crate::multiplier::OverflowPolicy;
use serde::Deserialize;
use std::path::Path;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_PATH: &str = "examplelib.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub multiplier: MultiplierConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Inputs for the demo run.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_lhs")]
    pub lhs: i64,
    #[serde(default = "default_rhs")]
    pub rhs: i64,
    #[serde(default = "default_left")]
    pub left: String,
    #[serde(default = "default_right")]
    pub right: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lhs: default_lhs(),
            rhs: default_rhs(),
            left: default_left(),
            right: default_right(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MultiplierConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

// Defaults
fn default_lhs() -> i64 {
    3
}
fn default_rhs() -> i64 {
    4
}
fn default_left() -> String {
    "hello ".into()
}
fn default_right() -> String {
    "world".into()
}
fn default_filter() -> String {
    "examplelib=info".into()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// An explicit path must exist; otherwise [`DEFAULT_PATH`] is optional.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(Path::new(DEFAULT_PATH)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.log.filter.trim().is_empty() {
            return Err(Error::config("log.filter must not be empty"));
        }
        Ok(())
    }
}
