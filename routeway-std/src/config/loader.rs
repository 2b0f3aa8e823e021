//! Configuration loading from disk.

use crate::{
    config::{
        schema::RouterConfig,
        validation::{ValidationError, validate_config},
    },
    patterns::PatternError,
};
use routeway_core::RouteError;
use std::{fs, path::Path};
use thiserror::Error;

/// Error type for configuration loading and router construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`RouterConfig`].
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but is semantically invalid.
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// A placeholder regex was rejected while building the registry.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A declared route could not be registered.
    #[error(transparent)]
    Route(#[from] RouteError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RouterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(content)?;
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    RouterConfig::from_toml_str(&content)
}
