//! Bollard-backed container runtime

use crate::docker::{ContainerRecord, ContainerRuntime, NetworkDescriptor, NetworkMembership};
use crate::error::DockerError;
use bollard::errors::Error as BollardError;
use bollard::models::ContainerInspectResponse;
use bollard::query_parameters::{
    InspectContainerOptions, InspectNetworkOptions, ListContainersOptions,
};
use bollard::Docker;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Docker connection target
#[derive(Debug, Clone, PartialEq, Eq)]
enum DockerConnection {
    Socket(String),
    Http(String),
}

impl DockerConnection {
    /// Parse `unix://PATH`, a bare socket path, or a `tcp://`/`http://` address.
    ///
    /// The path after `unix://` is always absolute, so `unix://tmp/docker.sock`
    /// names `/tmp/docker.sock`.
    fn parse(host: &str) -> Result<Self, DockerError> {
        if let Some(path) = host.strip_prefix("unix://") {
            let path = path.trim_start_matches('/');
            if path.is_empty() {
                return Err(invalid_host(host));
            }
            Ok(DockerConnection::Socket(format!("/{}", path)))
        } else if host.starts_with('/') {
            Ok(DockerConnection::Socket(host.to_string()))
        } else if host.starts_with("tcp://") || host.starts_with("http://") {
            Ok(DockerConnection::Http(host.to_string()))
        } else {
            Err(invalid_host(host))
        }
    }
}

fn invalid_host(host: &str) -> DockerError {
    DockerError::ConnectionFailed {
        host: host.to_string(),
        reason: "expected 'unix:///path/to/socket' or 'tcp://host:port'".to_string(),
    }
}

/// [`ContainerRuntime`] talking to a Docker engine
pub struct BollardRuntime {
    docker: Docker,
}

impl BollardRuntime {
    /// Connect to the engine at `host` and verify it answers
    pub async fn connect(host: &str, timeout_secs: u64) -> Result<Self, DockerError> {
        let connection_failed = |reason: String| DockerError::ConnectionFailed {
            host: host.to_string(),
            reason,
        };

        let docker = match DockerConnection::parse(host)? {
            DockerConnection::Socket(path) => {
                Docker::connect_with_socket(&path, timeout_secs, bollard::API_DEFAULT_VERSION)
            }
            DockerConnection::Http(url) => {
                Docker::connect_with_http(&url, timeout_secs, bollard::API_DEFAULT_VERSION)
            }
        }
        .map_err(|e| connection_failed(e.to_string()))?;

        docker
            .ping()
            .await
            .map_err(|e| connection_failed(e.to_string()))?;

        info!("Connected to Docker daemon at {}", host);
        Ok(Self { docker })
    }
}

impl ContainerRuntime for BollardRuntime {
    async fn get_network(&self, name: &str) -> Result<NetworkDescriptor, DockerError> {
        let network = self
            .docker
            .inspect_network(name, None::<InspectNetworkOptions>)
            .await
            .map_err(|e| match e {
                BollardError::DockerResponseServerError {
                    status_code: 404, ..
                } => DockerError::NetworkNotFound {
                    name: name.to_string(),
                },
                other => DockerError::ApiError(format!(
                    "Failed to inspect network {}: {}",
                    name, other
                )),
            })?;

        let id = network.id.ok_or_else(|| {
            DockerError::ApiError(format!("Network {} has no ID", name))
        })?;

        debug!("Resolved network {} to {}", name, id);
        Ok(NetworkDescriptor {
            name: name.to_string(),
            id,
        })
    }

    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, DockerError> {
        let summaries = self
            .docker
            .list_containers(None::<ListContainersOptions>)
            .await
            .map_err(|e| DockerError::ApiError(format!("Failed to list containers: {}", e)))?;

        let mut records = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let Some(id) = summary.id else {
                debug!("Skipping container summary without ID");
                continue;
            };

            match self
                .docker
                .inspect_container(&id, None::<InspectContainerOptions>)
                .await
            {
                Ok(response) => records.push(record_from_inspect(&id, response)),
                Err(BollardError::DockerResponseServerError {
                    status_code: 404, ..
                }) => {
                    warn!("Container {} disappeared before it could be inspected", id);
                }
                Err(e) => {
                    return Err(DockerError::ApiError(format!(
                        "Failed to inspect container {}: {}",
                        id, e
                    )));
                }
            }
        }

        Ok(records)
    }
}

/// Reduce an inspect response to a [`ContainerRecord`]
fn record_from_inspect(id: &str, response: ContainerInspectResponse) -> ContainerRecord {
    let name = response
        .name
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_default();

    let user = response.config.and_then(|c| c.user);

    let networks: HashMap<String, NetworkMembership> = response
        .network_settings
        .and_then(|s| s.networks)
        .unwrap_or_default()
        .into_iter()
        .map(|(network_name, endpoint)| {
            (
                network_name,
                NetworkMembership {
                    network_id: endpoint.network_id,
                    ip_address: endpoint.ip_address,
                },
            )
        })
        .collect();

    ContainerRecord {
        id: response.id.unwrap_or_else(|| id.to_string()),
        name,
        user,
        networks,
    }
}
