//! Container classification logic

use crate::docker::{ContainerRecord, NetworkDescriptor};

/// Outcome of classifying one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Belongs in the backend pool, with its address on the target network
    Backend(String),
    /// Not attached to the target network
    OffNetwork,
    /// Attached to a network of the same name but a different ID
    StaleNetwork,
    /// Attached, but not running as the expected user
    WrongUser,
    /// Eligible, but the runtime reports no address on the network
    NoAddress,
}

/// Decides which containers are HAProxy backends
pub struct BackendClassifier {
    network: NetworkDescriptor,
    expected_user: String,
}

impl BackendClassifier {
    pub fn new(network: NetworkDescriptor, expected_user: String) -> Self {
        Self {
            network,
            expected_user,
        }
    }

    pub fn classify(&self, container: &ContainerRecord) -> Classification {
        let Some(membership) = container.networks.get(&self.network.name) else {
            return Classification::OffNetwork;
        };

        if membership.network_id.as_deref() != Some(self.network.id.as_str()) {
            return Classification::StaleNetwork;
        }

        if container.user.as_deref() != Some(self.expected_user.as_str()) {
            return Classification::WrongUser;
        }

        match membership.ip_address.as_deref() {
            Some(ip) if !ip.is_empty() => Classification::Backend(ip.to_string()),
            _ => Classification::NoAddress,
        }
    }
}
