use std::collections::HashMap;
use std::path::Path;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::{ContractDescriptor, EndpointId};

/// Resolves a deployment descriptor to its on-chain address
///
/// Implementations are expected to be offline lookups (deployment artifacts,
/// address books); the wiring plan calls `resolve` once per contract.
pub trait DeploymentResolver {
    fn resolve(&self, descriptor: &ContractDescriptor) -> Result<Address>;
}

impl<R: DeploymentResolver + ?Sized> DeploymentResolver for &R {
    fn resolve(&self, descriptor: &ContractDescriptor) -> Result<Address> {
        (**self).resolve(descriptor)
    }
}

/// In-memory address book of deployments
///
/// Persisted as a JSON array of
/// `{"eid": 40161, "contractName": "MyOAppVoting", "address": "0x..."}`.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::address;
/// use oapp_topology::{ContractDescriptor, DeploymentBook, DeploymentResolver, EndpointId};
///
/// let sepolia = ContractDescriptor::new(EndpointId::Sepolia, "MyOAppVoting");
/// let book = DeploymentBook::new()
///     .with(sepolia.clone(), address!("1111111111111111111111111111111111111111"));
///
/// assert!(book.resolve(&sepolia).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentBook {
    addresses: HashMap<ContractDescriptor, Address>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentRecord {
    eid: EndpointId,
    contract_name: String,
    address: Address,
}

impl DeploymentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: ContractDescriptor, address: Address) -> Self {
        self.insert(descriptor, address);
        self
    }

    /// Records an address, returning the previous one if any
    pub fn insert(&mut self, descriptor: ContractDescriptor, address: Address) -> Option<Address> {
        self.addresses.insert(descriptor, address)
    }

    pub fn get(&self, descriptor: &ContractDescriptor) -> Option<Address> {
        self.addresses.get(descriptor).copied()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Parses an address book; a descriptor listed twice is rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<DeploymentRecord> = serde_json::from_str(json)?;

        let mut book = Self::new();
        for record in records {
            let descriptor = ContractDescriptor::new(record.eid, record.contract_name);
            if book.addresses.contains_key(&descriptor) {
                return Err(TopologyError::DuplicateContract {
                    descriptor: descriptor.to_string(),
                });
            }
            book.insert(descriptor, record.address);
        }

        debug!(deployments = book.len(), event = "deployment_book_loaded");
        Ok(book)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Serializes the book sorted by descriptor.
    pub fn to_json(&self) -> Result<String> {
        let mut entries: Vec<_> = self.addresses.iter().collect();
        entries.sort();

        let records: Vec<DeploymentRecord> = entries
            .into_iter()
            .map(|(descriptor, address)| DeploymentRecord {
                eid: descriptor.endpoint(),
                contract_name: descriptor.contract_name().to_owned(),
                address: *address,
            })
            .collect();

        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl DeploymentResolver for DeploymentBook {
    fn resolve(&self, descriptor: &ContractDescriptor) -> Result<Address> {
        self.get(descriptor)
            .ok_or_else(|| TopologyError::UnresolvedDeployment {
                descriptor: descriptor.to_string(),
            })
    }
}
