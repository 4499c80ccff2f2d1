use std::collections::BTreeMap;
use std::fmt;

use alloy_primitives::Bytes;
use bon::Builder;
use serde::{Deserialize, Serialize};

use super::ContractDescriptor;
use crate::{encode_options, ExecutorOption};

/// Directed edge: `from` trusts `to` as a remote peer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    from: ContractDescriptor,
    to: ContractDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<EdgeConfig>,
}

impl Connection {
    pub fn new(from: ContractDescriptor, to: ContractDescriptor) -> Self {
        Self {
            from,
            to,
            config: None,
        }
    }

    pub fn with_config(mut self, config: EdgeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn from(&self) -> &ContractDescriptor {
        &self.from
    }

    pub fn to(&self) -> &ContractDescriptor {
        &self.to
    }

    pub fn config(&self) -> Option<&EdgeConfig> {
        self.config.as_ref()
    }

    /// The `(from, to)` pair identifying this edge
    pub fn key(&self) -> (&ContractDescriptor, &ContractDescriptor) {
        (&self.from, &self.to)
    }

    /// Returns the same edge pointing the other way, without config
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone())
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An executor option the OApp enforces for one message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnforcedOption {
    pub msg_type: u16,
    pub option: ExecutorOption,
}

/// Per-edge settings applied on the `from` side
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeConfig {
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    enforced_options: Vec<EnforcedOption>,
}

impl EdgeConfig {
    pub fn enforced_options(&self) -> &[EnforcedOption] {
        &self.enforced_options
    }

    /// Enforced options grouped per message type, ascending, each encoded as
    /// a single options blob.
    pub fn encoded_options(&self) -> Vec<(u16, Bytes)> {
        let mut grouped: BTreeMap<u16, Vec<ExecutorOption>> = BTreeMap::new();
        for enforced in &self.enforced_options {
            grouped
                .entry(enforced.msg_type)
                .or_default()
                .push(enforced.option);
        }

        grouped
            .into_iter()
            .map(|(msg_type, options)| (msg_type, encode_options(&options)))
            .collect()
    }
}
