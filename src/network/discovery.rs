//! Backend container discovery

use crate::docker::classifier::{BackendClassifier, Classification};
use crate::docker::ContainerRuntime;
use crate::error::DockerError;
use tracing::{debug, info, warn};

/// Finds the addresses of backend containers on a network
pub struct NetworkDiscovery<'a, R> {
    runtime: &'a R,
    network_name: String,
    expected_user: String,
}

impl<'a, R: ContainerRuntime> NetworkDiscovery<'a, R> {
    pub fn new(runtime: &'a R, network_name: &str, expected_user: &str) -> Self {
        Self {
            runtime,
            network_name: network_name.to_string(),
            expected_user: expected_user.to_string(),
        }
    }

    /// Addresses of every running container attached to the network and
    /// running as the expected user, in runtime order.
    ///
    /// The network is resolved once up front; memberships carrying another
    /// network ID under the same name are ignored.
    pub async fn discover_backends(&self) -> Result<Vec<String>, DockerError> {
        let network = self.runtime.get_network(&self.network_name).await?;
        let containers = self.runtime.list_containers().await?;
        let classifier = BackendClassifier::new(network, self.expected_user.clone());

        let mut backends = Vec::new();
        for container in &containers {
            match classifier.classify(container) {
                Classification::Backend(address) => {
                    debug!("Container {} is a backend at {}", container.name, address);
                    backends.push(address);
                }
                Classification::NoAddress => {
                    warn!(
                        "Container {} matches but has no address on {}",
                        container.name, self.network_name
                    );
                }
                other => {
                    debug!("Skipping container {}: {:?}", container.name, other);
                }
            }
        }

        info!(
            "Discovered {} backend(s) among {} running container(s) on {}",
            backends.len(),
            containers.len(),
            self.network_name
        );
        Ok(backends)
    }
}
