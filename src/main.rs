use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tor_haproxy_confgen::app::generate;
use tor_haproxy_confgen::config::cli::{print_default_config, CliArgs};
use tor_haproxy_confgen::config::{load_configuration, AppConfig};
use tor_haproxy_confgen::docker::BollardRuntime;
use tor_haproxy_confgen::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        print_default_config();
        return ExitCode::SUCCESS;
    }

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(cli.log_level.as_deref().unwrap_or("info"));
            error!("{}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so dry-run output stays clean
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: &AppConfig) -> Result<(), AppError> {
    info!("Generating HAProxy configuration for network {}", config.network_name);

    let runtime = BollardRuntime::connect(&config.docker_host, config.docker_timeout).await?;
    let report = generate(config, &runtime).await?;

    match report.output {
        Some(path) => info!(
            "Configured {} {} backend(s) in {}",
            report.backends.len(),
            report.mode,
            path.display()
        ),
        None => print!("{}", report.rendered),
    }

    Ok(())
}
