//! Declarative OApp topology
//!
//! A topology lists the deployments of an OApp (`contracts`) and the directed
//! peer connections between them (`connections`). Values are immutable and
//! validated on construction.

mod config;
mod connection;
mod contract;
mod mesh;
mod validation;

pub use config::TopologyConfig;
pub use connection::{Connection, EdgeConfig, EnforcedOption};
pub use contract::{ContractDescriptor, ContractNode, NodeConfig};
pub use mesh::{full_mesh_connections, full_mesh_size};
pub use validation::ValidationConfig;
