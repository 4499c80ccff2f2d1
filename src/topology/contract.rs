use std::fmt;

use alloy_primitives::Address;
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::EndpointId;

/// "The contract named X as deployed on network Y"
///
/// Persisted as `{"eid": 40161, "contractName": "MyOAppVoting"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDescriptor {
    #[serde(rename = "eid")]
    endpoint: EndpointId,
    contract_name: String,
}

impl ContractDescriptor {
    pub fn new(endpoint: EndpointId, contract_name: impl Into<String>) -> Self {
        Self {
            endpoint,
            contract_name: contract_name.into(),
        }
    }

    pub fn endpoint(&self) -> EndpointId {
        self.endpoint
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }
}

impl fmt::Display for ContractDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.contract_name, self.endpoint)
    }
}

/// Per-deployment settings applied after peers are wired
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    /// Address the OApp's ownership is handed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<Address>,
    /// Address allowed to configure the OApp on the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delegate: Option<Address>,
}

impl NodeConfig {
    pub fn owner(&self) -> Option<Address> {
        self.owner
    }

    pub fn delegate(&self) -> Option<Address> {
        self.delegate
    }
}

/// An entry of the topology's `contracts` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractNode {
    contract: ContractDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<NodeConfig>,
}

impl ContractNode {
    pub fn new(contract: ContractDescriptor) -> Self {
        Self {
            contract,
            config: None,
        }
    }

    pub fn with_config(mut self, config: NodeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn contract(&self) -> &ContractDescriptor {
        &self.contract
    }

    pub fn config(&self) -> Option<&NodeConfig> {
        self.config.as_ref()
    }
}

impl From<ContractDescriptor> for ContractNode {
    fn from(contract: ContractDescriptor) -> Self {
        Self::new(contract)
    }
}
