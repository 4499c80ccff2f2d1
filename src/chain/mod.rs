//! Chain configuration for LayerZero endpoints
//!
//! Maps `alloy_chains::NamedChain` values to the endpoint ids used throughout
//! the topology, and endpoints back to their EVM chain.

mod endpoints;

pub use endpoints::LzEndpoint;
