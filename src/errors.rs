use std::io;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("duplicate route: {verb} {pattern}")]
    Duplicate { pattern: String, verb: String },
    #[error("pattern already registered: {pattern}")]
    PatternInUse { pattern: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no route matches the requested path")]
    NotFound,
    #[error("route matched but the verb is not supported")]
    MethodNotAllowed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
