//! Network operations module
//!
//! Resolves the target network and discovers the backends attached to it

pub mod discovery;

pub use discovery::NetworkDiscovery;
