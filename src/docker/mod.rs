//! Docker API integration module
//!
//! Handles Docker API connections and container classification

use crate::error::DockerError;
use std::collections::HashMap;
use std::future::Future;

pub mod classifier;
pub mod client;
#[cfg(test)]
pub(crate) mod fake;

pub use client::BollardRuntime;

/// Inspected container, reduced to the fields discovery looks at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerRecord {
    pub id: String,
    pub name: String,
    /// `Config.User`, absent when the image does not set one
    pub user: Option<String>,
    /// Network memberships keyed by network name
    pub networks: HashMap<String, NetworkMembership>,
}

/// A container's attachment to one network
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkMembership {
    pub network_id: Option<String>,
    pub ip_address: Option<String>,
}

/// Network resolved by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub name: String,
    pub id: String,
}

/// Read-only view of a container runtime
pub trait ContainerRuntime {
    /// Resolve a network by name, failing with [`DockerError::NetworkNotFound`]
    fn get_network(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<NetworkDescriptor, DockerError>> + Send;

    /// Running containers, in the order the runtime reports them
    fn list_containers(
        &self,
    ) -> impl Future<Output = Result<Vec<ContainerRecord>, DockerError>> + Send;
}
