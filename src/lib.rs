//! Tor HAProxy Confgen - HAProxy configuration generator for Tor containers
//!
//! This library discovers the Tor containers attached to a Docker network and
//! renders their addresses into an HAProxy configuration through a template.

pub mod app;
pub mod config;
pub mod docker;
pub mod error;
pub mod network;
pub mod render;

pub use error::AppError;
