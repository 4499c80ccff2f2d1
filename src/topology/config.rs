//! The topology root object and its validating constructor

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use super::mesh::{full_mesh_connections, full_mesh_size};
use super::{Connection, ContractDescriptor, ContractNode, ValidationConfig};
use crate::error::{Result, TopologyError};
use crate::spans;

/// Deployments of an OApp and the peer connections between them
///
/// A `TopologyConfig` can only be obtained through a validating constructor
/// (including deserialization), so every value upholds:
///
/// - contract names are non-empty and no descriptor appears twice in `contracts`
/// - every connection end is listed in `contracts`
/// - no connection points at its own origin
/// - no `(from, to)` pair appears twice in `connections`
///
/// # Example
///
/// ```rust
/// use oapp_topology::{ContractDescriptor, ContractNode, EndpointId, TopologyConfig};
///
/// let sepolia = ContractDescriptor::new(EndpointId::Sepolia, "MyOAppVoting");
/// let op_sepolia = ContractDescriptor::new(EndpointId::OptimismSepolia, "MyOAppVoting");
///
/// let topology = TopologyConfig::full_mesh([
///     ContractNode::new(sepolia.clone()),
///     ContractNode::new(op_sepolia.clone()),
/// ])?;
/// assert_eq!(topology.connection_count(), 2);
/// assert_eq!(topology.peers_of(&sepolia).collect::<Vec<_>>(), vec![&op_sepolia]);
/// # Ok::<(), oapp_topology::TopologyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyConfig {
    contracts: Vec<ContractNode>,
    connections: Vec<Connection>,
}

/// Unvalidated wire form
#[derive(Deserialize)]
struct RawTopology {
    contracts: Vec<ContractNode>,
    #[serde(default)]
    connections: Vec<Connection>,
}

impl<'de> Deserialize<'de> for TopologyConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTopology::deserialize(deserializer)?;
        Self::new(raw.contracts, raw.connections).map_err(serde::de::Error::custom)
    }
}

impl TopologyConfig {
    /// Validates and builds a topology with the default [`ValidationConfig`].
    pub fn new(contracts: Vec<ContractNode>, connections: Vec<Connection>) -> Result<Self> {
        Self::with_validation(contracts, connections, ValidationConfig::default())
    }

    /// Validates and builds a topology with an explicit policy.
    pub fn with_validation(
        contracts: Vec<ContractNode>,
        connections: Vec<Connection>,
        policy: ValidationConfig,
    ) -> Result<Self> {
        let span = spans::validate_topology(contracts.len(), connections.len(), &policy);
        let _guard = span.enter();

        if let Err(e) = validate(&contracts, &connections, &policy) {
            spans::record_error(&e);
            return Err(e);
        }

        info!(
            contracts = contracts.len(),
            connections = connections.len(),
            event = "topology_validated"
        );

        Ok(Self {
            contracts,
            connections,
        })
    }

    /// Builds the complete directed graph over `contracts`, in their order.
    pub fn full_mesh(contracts: impl IntoIterator<Item = ContractNode>) -> Result<Self> {
        let contracts: Vec<ContractNode> = contracts.into_iter().collect();
        let connections = full_mesh_connections(contracts.iter().map(ContractNode::contract));
        Self::new(contracts, connections)
    }

    pub fn contracts(&self) -> &[ContractNode] {
        &self.contracts
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Descriptors of every deployment, in `contracts` order
    pub fn descriptors(&self) -> impl Iterator<Item = &ContractDescriptor> {
        self.contracts.iter().map(ContractNode::contract)
    }

    pub fn contains(&self, descriptor: &ContractDescriptor) -> bool {
        self.node(descriptor).is_some()
    }

    pub fn node(&self, descriptor: &ContractDescriptor) -> Option<&ContractNode> {
        self.contracts
            .iter()
            .find(|node| node.contract() == descriptor)
    }

    /// Remote peers `descriptor` trusts, in `connections` order
    pub fn peers_of<'a>(
        &'a self,
        descriptor: &'a ContractDescriptor,
    ) -> impl Iterator<Item = &'a ContractDescriptor> + 'a {
        self.connections
            .iter()
            .filter(move |c| c.from() == descriptor)
            .map(Connection::to)
    }

    /// Deployments that trust `descriptor` as a peer, in `connections` order
    pub fn incoming<'a>(
        &'a self,
        descriptor: &'a ContractDescriptor,
    ) -> impl Iterator<Item = &'a ContractDescriptor> + 'a {
        self.connections
            .iter()
            .filter(move |c| c.to() == descriptor)
            .map(Connection::from)
    }

    /// Returns true when every ordered pair of distinct deployments is connected.
    ///
    /// Pairs on the same endpoint count too, so a topology validated with
    /// [`ValidationConfig::strict`] is only a full mesh here when it holds at
    /// most one deployment per endpoint.
    pub fn is_full_mesh(&self) -> bool {
        missing_mesh_edge(&self.contracts, &self.connections, true).is_none()
            && self.connections.len() == full_mesh_size(self.contracts.len())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a topology from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a topology JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let span = spans::load_topology(path);
        let _guard = span.enter();

        let contents = std::fs::read_to_string(path).inspect_err(spans::record_error)?;
        debug!(bytes = contents.len(), event = "topology_file_read");

        Self::from_json_str(&contents).inspect_err(spans::record_error)
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

fn validate(
    contracts: &[ContractNode],
    connections: &[Connection],
    policy: &ValidationConfig,
) -> Result<()> {
    let mut known: HashSet<&ContractDescriptor> = HashSet::with_capacity(contracts.len());
    for node in contracts {
        let descriptor = node.contract();
        if descriptor.contract_name().is_empty() {
            return Err(TopologyError::EmptyContractName {
                endpoint: descriptor.endpoint(),
            });
        }
        if !known.insert(descriptor) {
            return Err(TopologyError::DuplicateContract {
                descriptor: descriptor.to_string(),
            });
        }
    }

    let mut edges = HashSet::with_capacity(connections.len());
    for connection in connections {
        let (from, to) = connection.key();

        if from == to {
            return Err(TopologyError::SelfConnection {
                descriptor: from.to_string(),
            });
        }

        if let Some(missing) = [from, to].into_iter().find(|d| !known.contains(d)) {
            return Err(TopologyError::DanglingConnection {
                from: from.to_string(),
                to: to.to_string(),
                missing: missing.to_string(),
            });
        }

        if from.endpoint() == to.endpoint() {
            if !policy.allow_same_endpoint_peers {
                return Err(TopologyError::SameEndpointConnection {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            warn!(
                from = %from,
                to = %to,
                event = "same_endpoint_connection"
            );
        }

        if !edges.insert((from, to)) {
            return Err(TopologyError::DuplicateConnection {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }

    if policy.require_full_mesh {
        if let Some((from, to)) =
            missing_mesh_edge(contracts, connections, policy.allow_same_endpoint_peers)
        {
            return Err(TopologyError::IncompleteMesh {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }

    debug!(edges = edges.len(), event = "topology_invariants_checked");
    Ok(())
}

/// First ordered pair of distinct deployments with no connection
///
/// Pairs sharing an endpoint are skipped unless `same_endpoint` is set.
fn missing_mesh_edge<'a>(
    contracts: &'a [ContractNode],
    connections: &[Connection],
    same_endpoint: bool,
) -> Option<(&'a ContractDescriptor, &'a ContractDescriptor)> {
    let edges: HashSet<_> = connections.iter().map(Connection::key).collect();

    contracts.iter().map(ContractNode::contract).find_map(|from| {
        contracts
            .iter()
            .map(ContractNode::contract)
            .filter(|to| *to != from)
            .filter(|to| same_endpoint || to.endpoint() != from.endpoint())
            .find(|to| !edges.contains(&(from, *to)))
            .map(|to| (from, to))
    })
}
