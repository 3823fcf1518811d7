//! Centralized error types and handling

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Docker API error: {0}")]
    Docker(#[from] DockerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Docker-related errors
#[derive(Debug, Error)]
pub enum DockerError {
    #[error("Failed to connect to Docker daemon at {host}: {reason}")]
    ConnectionFailed { host: String, reason: String },

    #[error("Docker network not found: {name}")]
    NetworkNotFound { name: String },

    #[error("Docker API error: {0}")]
    ApiError(String),
}

/// Template rendering and output errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render template {}: {reason}", path.display())]
    Template { path: PathBuf, reason: String },

    #[error("Failed to write configuration to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("Missing required configuration: {field}")]
    MissingRequired { field: String },
}
