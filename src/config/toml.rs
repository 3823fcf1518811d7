//! TOML configuration file parsing

use crate::config::{AppConfig, ProxyMode};
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// TOML configuration structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub network_name: Option<String>,
    pub expected_user: Option<String>,
    pub template_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub proxy_mode: Option<String>,
    pub logging: Option<LoggingConfig>,
    pub docker: Option<DockerConfig>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Docker configuration
#[derive(Debug, Deserialize)]
pub struct DockerConfig {
    pub host: Option<String>,
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Apply file values over base configuration
    pub fn apply_to_config(self, mut base_config: AppConfig) -> AppConfig {
        if let Some(network) = self.network_name {
            base_config.network_name = network;
        }
        if let Some(user) = self.expected_user {
            base_config.expected_user = user;
        }
        if let Some(template) = self.template_path {
            base_config.template_path = template;
        }
        if let Some(output) = self.output_path {
            base_config.output_path = output;
        }
        if let Some(mode) = self.proxy_mode {
            base_config.proxy_mode = ProxyMode::resolve(Some(mode.as_str()));
        }
        if let Some(level) = self.logging.and_then(|l| l.level) {
            base_config.log_level = level;
        }
        if let Some(docker) = self.docker {
            if let Some(host) = docker.host {
                base_config.docker_host = host;
            }
            if let Some(timeout) = docker.timeout {
                base_config.docker_timeout = timeout;
            }
        }
        base_config
    }
}

/// Load configuration from TOML file
pub fn load_toml_config(path: &str) -> Result<TomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_string(),
    })?;

    parse_toml_config(&content)
}

/// Parse configuration from TOML text
pub fn parse_toml_config(content: &str) -> Result<TomlConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
}
