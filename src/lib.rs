//! # oapp-topology
//!
//! Typed peer topologies for LayerZero V2 OApps.
//!
//! A topology lists where an OApp is deployed and which deployments trust each
//! other as remote peers. This crate models it as an immutable, validated
//! value, persists it as JSON, and turns it into an offline wiring plan of
//! OApp configuration calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use oapp_topology::{ContractDescriptor, ContractNode, EndpointId, TopologyConfig};
//!
//! # fn example() -> Result<(), oapp_topology::TopologyError> {
//! let sepolia = ContractDescriptor::new(EndpointId::Sepolia, "MyOAppVoting");
//! let op_sepolia = ContractDescriptor::new(EndpointId::OptimismSepolia, "MyOAppVoting");
//! let arb_sepolia = ContractDescriptor::new(EndpointId::ArbitrumSepolia, "MyOAppVoting");
//!
//! // Every deployment peers with every other one
//! let topology = TopologyConfig::full_mesh([
//!     ContractNode::new(sepolia),
//!     ContractNode::new(op_sepolia),
//!     ContractNode::new(arb_sepolia),
//! ])?;
//!
//! assert_eq!(topology.connection_count(), 6);
//! let json = topology.to_json_pretty()?;
//! assert_eq!(TopologyConfig::from_json_str(&json)?, topology);
//! # Ok(())
//! # }
//! ```
//!
//! ## Wiring
//!
//! ```rust
//! use oapp_topology::deployment::voting_topology;
//! use oapp_topology::testing::FakeDeploymentResolver;
//! use oapp_topology::WirePlan;
//!
//! # fn example() -> Result<(), oapp_topology::TopologyError> {
//! let topology = voting_topology()?;
//! let resolver = FakeDeploymentResolver::for_topology(&topology);
//!
//! for tx in WirePlan::build(&topology, &resolver)? {
//!     println!("{tx}: {}", tx.calldata);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Public API
//!
//! - [`EndpointId`] and [`Stage`] - LayerZero V2 endpoint registry
//! - [`ContractDescriptor`], [`ContractNode`], [`Connection`] and [`TopologyConfig`] - the topology
//! - [`ValidationConfig`] - optional validation rules
//! - [`LzEndpoint`] - chain to endpoint mapping on `alloy_chains::NamedChain`
//! - [`WirePlan`] and [`DeploymentResolver`] - offline wiring
//! - [`TopologyError`] and [`Result`] - Error types for error handling

mod chain;
mod error;
mod protocol;
mod topology;
mod wiring;

pub use chain::LzEndpoint;
pub use error::{Result, TopologyError};
pub use protocol::{
    encode_options, EndpointId, ExecutorOption, InvalidEndpointId, Stage, EXECUTOR_WORKER_ID,
    OPTIONS_TYPE_3, OPTION_TYPE_COMPOSE, OPTION_TYPE_LZRECEIVE, OPTION_TYPE_ORDERED_EXECUTION,
};
pub use topology::{
    full_mesh_connections, full_mesh_size, Connection, ContractDescriptor, ContractNode,
    EdgeConfig, EnforcedOption, NodeConfig, TopologyConfig, ValidationConfig,
};
pub use wiring::{
    DeploymentBook, DeploymentResolver, EnforcedOptionParam, IOApp, WireCall, WirePlan,
    WireTransaction,
};

pub mod deployment;
pub mod spans;
pub mod testing;
