//! Test utilities and fake implementations
//!
//! Fakes for the traits at the crate's seams so wiring plans can be exercised
//! against failing or partially populated deployment sources.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, U160};

use crate::wiring::DeploymentResolver;
use crate::{ContractDescriptor, Result, TopologyConfig, TopologyError};

// ============================================================================
// Fake Deployment Resolver
// ============================================================================

/// A fake resolver returning pre-configured addresses.
///
/// Clones share state, so a test can keep a handle and inspect lookup counts
/// after handing the resolver to the code under test.
///
/// This allows testing scenarios like:
/// - Deployment missing from the artifacts
/// - Artifact source failing to read
/// - Each deployment being resolved exactly once
#[derive(Clone, Debug, Default)]
pub struct FakeDeploymentResolver {
    addresses: Arc<Mutex<HashMap<ContractDescriptor, Address>>>,
    failures: Arc<Mutex<Vec<ContractDescriptor>>>,
    lookups: Arc<Mutex<HashMap<ContractDescriptor, usize>>>,
}

impl FakeDeploymentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `0x00..01`, `0x00..02`, ... to the topology's contracts in order
    pub fn for_topology(topology: &TopologyConfig) -> Self {
        let resolver = Self::new();
        for (i, descriptor) in topology.descriptors().enumerate() {
            let address = Address::from(U160::from(i as u64 + 1));
            resolver.add_deployment(descriptor.clone(), address);
        }
        resolver
    }

    pub fn add_deployment(&self, descriptor: ContractDescriptor, address: Address) {
        self.addresses.lock().unwrap().insert(descriptor, address);
    }

    /// Configure a descriptor to fail with a simulated I/O error
    pub fn add_failure(&self, descriptor: ContractDescriptor) {
        self.failures.lock().unwrap().push(descriptor);
    }

    pub fn lookup_count(&self, descriptor: &ContractDescriptor) -> usize {
        self.lookups
            .lock()
            .unwrap()
            .get(descriptor)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_lookups(&self) -> usize {
        self.lookups.lock().unwrap().values().sum()
    }
}

impl DeploymentResolver for FakeDeploymentResolver {
    fn resolve(&self, descriptor: &ContractDescriptor) -> Result<Address> {
        *self
            .lookups
            .lock()
            .unwrap()
            .entry(descriptor.clone())
            .or_insert(0) += 1;

        if self.failures.lock().unwrap().contains(descriptor) {
            return Err(TopologyError::Io(std::io::Error::other(
                "Simulated artifact read error",
            )));
        }

        self.addresses
            .lock()
            .unwrap()
            .get(descriptor)
            .copied()
            .ok_or_else(|| TopologyError::UnresolvedDeployment {
                descriptor: descriptor.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContractNode, EndpointId};
    use std::collections::HashSet;

    #[test]
    fn test_for_topology_addresses_are_distinct_past_one_byte() {
        let topology = TopologyConfig::new(
            (0..300)
                .map(|i| ContractDescriptor::new(EndpointId::Sepolia, format!("Voting{i}")))
                .map(ContractNode::new)
                .collect(),
            vec![],
        )
        .unwrap();
        let resolver = FakeDeploymentResolver::for_topology(&topology);

        let addresses: HashSet<Address> = topology
            .descriptors()
            .map(|d| resolver.resolve(d).unwrap())
            .collect();
        assert_eq!(addresses.len(), 300);
        assert!(!addresses.contains(&Address::ZERO));

        let first = topology.descriptors().next().unwrap();
        assert_eq!(resolver.resolve(first).unwrap(), Address::with_last_byte(1));
        let last = topology.descriptors().last().unwrap();
        assert_eq!(resolver.resolve(last).unwrap(), Address::from(U160::from(300u64)));
    }
}
