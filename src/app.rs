//! One-shot generation pipeline: discover, render, write

use crate::config::{AppConfig, ProxyMode};
use crate::docker::ContainerRuntime;
use crate::error::AppError;
use crate::network::NetworkDiscovery;
use crate::render::{ConfigRenderer, RenderContext};
use std::path::PathBuf;
use tracing::info;

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub backends: Vec<String>,
    pub mode: ProxyMode,
    /// File written, `None` on a dry run
    pub output: Option<PathBuf>,
    pub rendered: String,
}

/// Regenerate the HAProxy configuration from the runtime's current state
pub async fn generate<R: ContainerRuntime>(
    config: &AppConfig,
    runtime: &R,
) -> Result<GenerationReport, AppError> {
    let backends = NetworkDiscovery::new(runtime, &config.network_name, &config.expected_user)
        .discover_backends()
        .await?;

    info!(
        "Rendering {} configuration on port {}",
        config.proxy_mode,
        config.proxy_mode.port()
    );

    let renderer = ConfigRenderer::new(&config.template_path, &config.output_path);
    let context = RenderContext::new(backends.clone(), config.proxy_mode);

    let (rendered, output) = if config.dry_run {
        (renderer.render(&context)?, None)
    } else {
        (
            renderer.render_to_file(&context)?,
            Some(config.output_path.clone()),
        )
    };

    Ok(GenerationReport {
        backends,
        mode: config.proxy_mode,
        output,
        rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::fake::FakeRuntime;
    use crate::error::{DockerError, RenderError};
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str = "mode {{ proxy_type }}\n\
{%- for host in tor_hosts %}\nserver {{ host }}:{{ tor_port }}\n{%- endfor %}\n";

    fn setup(dir: &TempDir) -> AppConfig {
        let template_path = dir.path().join("haproxy.j2");
        fs::write(&template_path, TEMPLATE).unwrap();
        AppConfig {
            template_path,
            output_path: dir.path().join("haproxy.cfg"),
            ..AppConfig::default()
        }
    }

    fn runtime() -> FakeRuntime {
        FakeRuntime::new()
            .with_network("net_tor", "net-id")
            .with_container("tor-1", Some("tor"), &[("net_tor", "net-id", "10.0.0.2")])
            .with_container("web", Some("www-data"), &[("bridge", "bridge-id", "172.17.0.2")])
            .with_container("tor-2", Some("tor"), &[("net_tor", "net-id", "10.0.0.3")])
    }

    #[tokio::test]
    async fn test_generate_writes_config() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            proxy_mode: ProxyMode::Http,
            ..setup(&dir)
        };

        let report = generate(&config, &runtime()).await.unwrap();

        assert_eq!(report.backends, vec!["10.0.0.2", "10.0.0.3"]);
        assert_eq!(report.mode, ProxyMode::Http);
        assert_eq!(report.output.as_deref(), Some(config.output_path.as_path()));

        let written = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            written,
            "mode http\nserver 10.0.0.2:9080\nserver 10.0.0.3:9080"
        );
        assert_eq!(written, report.rendered);
    }

    #[tokio::test]
    async fn test_generate_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let config = setup(&dir);
        let runtime = runtime();

        generate(&config, &runtime).await.unwrap();
        let first = fs::read(&config.output_path).unwrap();
        generate(&config, &runtime).await.unwrap();
        let second = fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_dry_run_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            dry_run: true,
            ..setup(&dir)
        };

        let report = generate(&config, &runtime()).await.unwrap();

        assert!(report.output.is_none());
        assert!(report.rendered.contains("server 10.0.0.2:9050"));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_missing_network_aborts_before_writing() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            network_name: "net_other".to_string(),
            ..setup(&dir)
        };

        let result = generate(&config, &runtime()).await;

        assert!(matches!(
            result,
            Err(AppError::Docker(DockerError::NetworkNotFound { .. }))
        ));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_missing_template_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            template_path: dir.path().join("absent.j2"),
            ..setup(&dir)
        };

        let result = generate(&config, &runtime()).await;

        assert!(matches!(
            result,
            Err(AppError::Render(RenderError::TemplateRead { .. }))
        ));
    }
}
