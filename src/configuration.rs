//! src/configuration.rs
use crate::error_chain_fmt;
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Number of HTTP worker threads. Falls back to one per physical core.
    pub workers: Option<usize>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to determine the current directory")]
    CurrentDirectory(#[source] std::io::Error),
    #[error("{0} is not a supported environment. Use either `local` or `production`.")]
    UnsupportedEnvironment(String),
    #[error("Failed to load the configuration")]
    Load(#[from] config::ConfigError),
}

impl std::fmt::Debug for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigurationError::UnsupportedEnvironment(s)),
        }
    }
}

/// Layers `configuration/base`, the environment specific file and any
/// `APP_`-prefixed variables, e.g. `APP_APPLICATION__PORT=5001`.
pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir().map_err(ConfigurationError::CurrentDirectory)?;
    let configuration_directory = base_path.join("configuration");

    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;

    get_configuration_from(&configuration_directory, &environment, environment_overrides())
}

/// Variables read from the process environment, `__` separating nested keys.
pub fn environment_overrides() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: &Environment,
    overrides: config::Environment,
) -> Result<Settings, ConfigurationError> {
    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .add_source(overrides)
        .build()?;

    Ok(settings.try_deserialize()?)
}
