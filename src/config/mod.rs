//! Configuration management module
//!
//! Handles loading configuration from multiple sources with proper precedence:
//! CLI arguments > environment variables > TOML files > defaults

use crate::error::ConfigError;
use std::path::PathBuf;

pub mod cli;
pub mod env;
pub mod mode;
pub mod toml;

pub use mode::ProxyMode;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Docker engine endpoint, `unix://` socket or `tcp://` host
    pub docker_host: String,
    /// Docker request timeout in seconds
    pub docker_timeout: u64,
    /// Network the backend containers must be attached to
    pub network_name: String,
    /// User the backend containers must run as
    pub expected_user: String,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub proxy_mode: ProxyMode,
    pub log_level: String,
    /// Print the rendered configuration instead of writing it
    pub dry_run: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docker_host: "unix://tmp/docker.sock".to_string(),
            docker_timeout: 120,
            network_name: "net_tor".to_string(),
            expected_user: "tor".to_string(),
            template_path: PathBuf::from("haproxy.j2"),
            output_path: PathBuf::from("/usr/local/etc/haproxy/haproxy.cfg"),
            proxy_mode: ProxyMode::default(),
            log_level: "info".to_string(),
            dry_run: false,
        }
    }
}

impl AppConfig {
    /// Reject configurations that cannot possibly produce a useful run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("docker_host", self.docker_host.trim().is_empty()),
            ("network_name", self.network_name.trim().is_empty()),
            ("expected_user", self.expected_user.trim().is_empty()),
            ("template_path", self.template_path.as_os_str().is_empty()),
            ("output_path", self.output_path.as_os_str().is_empty()),
        ];

        match required.iter().find(|(_, missing)| *missing) {
            Some((field, _)) => Err(ConfigError::MissingRequired {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Build the effective configuration from every source
pub fn load_configuration(cli: &cli::CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(ref path) = cli.config {
        config = self::toml::load_toml_config(path)?.apply_to_config(config);
    }

    config = env::apply_env_config(config)?;
    config = cli.apply_to_config(config);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.docker_host, "unix://tmp/docker.sock");
        assert_eq!(config.network_name, "net_tor");
        assert_eq!(config.expected_user, "tor");
        assert_eq!(config.template_path, PathBuf::from("haproxy.j2"));
        assert_eq!(
            config.output_path,
            PathBuf::from("/usr/local/etc/haproxy/haproxy.cfg")
        );
        assert_eq!(config.proxy_mode, ProxyMode::Tcp);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = AppConfig {
            network_name: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired { field }) if field == "network_name"
        ));

        let config = AppConfig {
            output_path: PathBuf::new(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired { field }) if field == "output_path"
        ));
    }
}
