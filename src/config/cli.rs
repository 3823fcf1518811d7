//! Command-line argument parsing

use crate::config::{AppConfig, ProxyMode};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure
#[derive(Parser, Debug, Default)]
#[command(name = "tor-haproxy-confgen")]
#[command(about = "Generate an HAProxy configuration from Tor containers on a Docker network")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, help = "Set the logging level")]
    pub log_level: Option<String>,

    /// Docker endpoint
    #[arg(long, help = "Docker endpoint (unix://PATH or tcp://HOST:PORT)")]
    pub docker_host: Option<String>,

    /// Target network name
    #[arg(long, help = "Docker network the backend containers are attached to")]
    pub network: Option<String>,

    /// Expected container user
    #[arg(long, help = "User the backend containers must run as")]
    pub user: Option<String>,

    /// Template path
    #[arg(long, help = "Path to the HAProxy configuration template")]
    pub template: Option<PathBuf>,

    /// Output path
    #[arg(short, long, help = "Path the rendered configuration is written to")]
    pub output: Option<PathBuf>,

    /// Proxy mode
    #[arg(long, help = "Proxy mode: 'http', anything else selects tcp")]
    pub proxy_mode: Option<String>,

    /// Print instead of writing
    #[arg(long, help = "Print the rendered configuration to stdout instead of writing it")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in TOML format and exit")]
    pub print_default_config: bool,
}

impl CliArgs {
    /// Apply CLI arguments over base configuration
    pub fn apply_to_config(&self, mut base_config: AppConfig) -> AppConfig {
        if let Some(ref level) = self.log_level {
            base_config.log_level = level.clone();
        }

        if let Some(ref host) = self.docker_host {
            base_config.docker_host = host.clone();
        }

        if let Some(ref network) = self.network {
            base_config.network_name = network.clone();
        }

        if let Some(ref user) = self.user {
            base_config.expected_user = user.clone();
        }

        if let Some(ref template) = self.template {
            base_config.template_path = template.clone();
        }

        if let Some(ref output) = self.output {
            base_config.output_path = output.clone();
        }

        if let Some(ref mode) = self.proxy_mode {
            base_config.proxy_mode = ProxyMode::resolve(Some(mode.as_str()));
        }

        if self.dry_run {
            base_config.dry_run = true;
        }

        base_config
    }
}

/// Render the default configuration in TOML format
pub fn default_config_toml() -> String {
    let default_config = AppConfig::default();
    let mut out = String::new();

    out.push_str("# Tor HAProxy Confgen Configuration\n");
    out.push_str("# This is the default configuration with all available options\n\n");
    out.push_str("# Docker network the backend containers are attached to\n");
    out.push_str(&format!("network_name = \"{}\"\n\n", default_config.network_name));
    out.push_str("# User the backend containers must run as\n");
    out.push_str(&format!("expected_user = \"{}\"\n\n", default_config.expected_user));
    out.push_str("# Template rendered into the HAProxy configuration\n");
    out.push_str(&format!(
        "template_path = \"{}\"\n\n",
        default_config.template_path.display()
    ));
    out.push_str("# Destination of the rendered configuration, overwritten on each run\n");
    out.push_str(&format!(
        "output_path = \"{}\"\n\n",
        default_config.output_path.display()
    ));
    out.push_str("# Proxy mode: \"http\" (port 9080), anything else is tcp (port 9050)\n");
    out.push_str(&format!("proxy_mode = \"{}\"\n\n", default_config.proxy_mode));
    out.push_str("[logging]\n");
    out.push_str("# Log level: trace, debug, info, warn, error\n");
    out.push_str(&format!("level = \"{}\"\n\n", default_config.log_level));
    out.push_str("[docker]\n");
    out.push_str("# Docker endpoint: unix://PATH or tcp://HOST:PORT\n");
    out.push_str(&format!("host = \"{}\"\n", default_config.docker_host));
    out.push_str("# Request timeout in seconds\n");
    out.push_str(&format!("timeout = {}\n", default_config.docker_timeout));

    out
}

/// Print default configuration in TOML format
pub fn print_default_config() {
    print!("{}", default_config_toml());
}
