use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    Sequential,
    Pool,
}

/// Typed gateway configuration, loadable from a TOML file. An empty
/// `dynamic_suffix` routes every request through the application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub static_root: PathBuf,
    pub default_document: String,
    pub dynamic_suffix: String,
    pub read_limit: usize,
    pub executor: ExecutorKind,
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 6968,
            static_root: PathBuf::from("static"),
            default_document: "index.html".to_string(),
            dynamic_suffix: String::new(),
            read_limit: 1024,
            executor: ExecutorKind::Sequential,
            pool_size: 0,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
