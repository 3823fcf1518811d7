//! In-memory runtime for tests

use crate::docker::{ContainerRecord, ContainerRuntime, NetworkDescriptor, NetworkMembership};
use crate::error::DockerError;

#[derive(Default)]
pub struct FakeRuntime {
    networks: Vec<NetworkDescriptor>,
    containers: Vec<ContainerRecord>,
    fail_list: bool,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network(mut self, name: &str, id: &str) -> Self {
        self.networks.push(NetworkDescriptor {
            name: name.to_string(),
            id: id.to_string(),
        });
        self
    }

    /// Add a container with `(network name, network id, ip)` memberships
    pub fn with_container(
        mut self,
        name: &str,
        user: Option<&str>,
        networks: &[(&str, &str, &str)],
    ) -> Self {
        self.containers.push(ContainerRecord {
            id: format!("{}-id", name),
            name: name.to_string(),
            user: user.map(str::to_string),
            networks: networks
                .iter()
                .map(|(net, id, ip)| {
                    (
                        net.to_string(),
                        NetworkMembership {
                            network_id: Some(id.to_string()),
                            ip_address: Some(ip.to_string()),
                        },
                    )
                })
                .collect(),
        });
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }
}

impl ContainerRuntime for FakeRuntime {
    async fn get_network(&self, name: &str) -> Result<NetworkDescriptor, DockerError> {
        self.networks
            .iter()
            .find(|n| n.name == name)
            .cloned()
            .ok_or_else(|| DockerError::NetworkNotFound {
                name: name.to_string(),
            })
    }

    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, DockerError> {
        if self.fail_list {
            return Err(DockerError::ApiError("list failed".to_string()));
        }
        Ok(self.containers.clone())
    }
}
