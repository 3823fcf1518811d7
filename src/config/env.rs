//! Environment variable configuration handling

use crate::config::mode::PROXY_MODE_VAR;
use crate::config::{AppConfig, ProxyMode};
use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "TOR_CONFGEN_";

/// Apply process environment configuration over base configuration
pub fn apply_env_config(base_config: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_env_config_from(base_config, |key| env::var(key).ok())
}

/// Apply environment configuration read through `lookup`
pub fn apply_env_config_from<F>(mut base_config: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let prefixed = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

    // Unprefixed, and permissive: anything but "http" means TCP
    if let Some(mode) = lookup(PROXY_MODE_VAR) {
        base_config.proxy_mode = ProxyMode::resolve(Some(mode.as_str()));
    }

    if let Some(host) = prefixed("DOCKER_HOST") {
        base_config.docker_host = host;
    }

    if let Some(timeout) = prefixed("DOCKER_TIMEOUT") {
        base_config.docker_timeout = timeout.trim().parse::<u64>().map_err(|_| {
            ConfigError::InvalidFormat(format!(
                "Invalid {}DOCKER_TIMEOUT '{}'. Expected a number of seconds",
                ENV_PREFIX, timeout
            ))
        })?;
    }

    if let Some(network) = prefixed("NETWORK") {
        base_config.network_name = network;
    }

    if let Some(user) = prefixed("USER") {
        base_config.expected_user = user;
    }

    if let Some(template) = prefixed("TEMPLATE") {
        base_config.template_path = PathBuf::from(template);
    }

    if let Some(output) = prefixed("OUTPUT") {
        base_config.output_path = PathBuf::from(output);
    }

    if let Some(level) = prefixed("LOG_LEVEL") {
        base_config.log_level = level;
    }

    Ok(base_config)
}
