//! HAProxy configuration rendering
//!
//! Reads a Jinja-style template, substitutes the discovered backends and the
//! proxy mode parameters, and writes the result over the destination file.

use crate::config::ProxyMode;
use crate::error::RenderError;
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Values exposed to the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub tor_hosts: Vec<String>,
    pub proxy_type: String,
    pub tor_port: u16,
}

impl RenderContext {
    pub fn new(tor_hosts: Vec<String>, mode: ProxyMode) -> Self {
        Self {
            tor_hosts,
            proxy_type: mode.protocol().to_string(),
            tor_port: mode.port(),
        }
    }
}

/// Renders a template file into the HAProxy configuration file
pub struct ConfigRenderer {
    template_path: PathBuf,
    output_path: PathBuf,
}

impl ConfigRenderer {
    pub fn new(template_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Render the template with `context`
    pub fn render(&self, context: &RenderContext) -> Result<String, RenderError> {
        let source =
            fs::read_to_string(&self.template_path).map_err(|source| RenderError::TemplateRead {
                path: self.template_path.clone(),
                source,
            })?;

        let env = Environment::new();
        let rendered = env
            .render_str(&source, context)
            .map_err(|e| RenderError::Template {
                path: self.template_path.clone(),
                reason: e.to_string(),
            })?;

        debug!(
            "Rendered {} with {} backend(s)",
            self.template_path.display(),
            context.tor_hosts.len()
        );
        Ok(rendered)
    }

    /// Overwrite the output file with `contents`
    pub fn write(&self, contents: &str) -> Result<(), RenderError> {
        fs::write(&self.output_path, contents).map_err(|source| RenderError::OutputWrite {
            path: self.output_path.clone(),
            source,
        })?;

        info!("Wrote HAProxy configuration to {}", self.output_path.display());
        Ok(())
    }

    pub fn render_to_file(&self, context: &RenderContext) -> Result<String, RenderError> {
        let rendered = self.render(context)?;
        self.write(&rendered)?;
        Ok(rendered)
    }
}
