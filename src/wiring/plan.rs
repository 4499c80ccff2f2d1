use std::collections::HashMap;
use std::fmt;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use tracing::{debug, info};

use super::oapp::{EnforcedOptionParam, IOApp};
use super::DeploymentResolver;
use crate::error::{Result, TopologyError};
use crate::{spans, ContractDescriptor, EndpointId, TopologyConfig};

/// OApp configuration call emitted by the wiring plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireCall {
    SetPeer,
    SetEnforcedOptions,
    SetDelegate,
    TransferOwnership,
}

impl WireCall {
    /// Solidity function signature
    pub const fn signature(self) -> &'static str {
        match self {
            Self::SetPeer => IOApp::setPeerCall::SIGNATURE,
            Self::SetEnforcedOptions => IOApp::setEnforcedOptionsCall::SIGNATURE,
            Self::SetDelegate => IOApp::setDelegateCall::SIGNATURE,
            Self::TransferOwnership => IOApp::transferOwnershipCall::SIGNATURE,
        }
    }

    pub const fn selector(self) -> [u8; 4] {
        match self {
            Self::SetPeer => IOApp::setPeerCall::SELECTOR,
            Self::SetEnforcedOptions => IOApp::setEnforcedOptionsCall::SELECTOR,
            Self::SetDelegate => IOApp::setDelegateCall::SELECTOR,
            Self::TransferOwnership => IOApp::transferOwnershipCall::SELECTOR,
        }
    }
}

impl fmt::Display for WireCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SetPeer => "setPeer",
            Self::SetEnforcedOptions => "setEnforcedOptions",
            Self::SetDelegate => "setDelegate",
            Self::TransferOwnership => "transferOwnership",
        };
        f.write_str(name)
    }
}

/// An unsigned transaction against one OApp deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireTransaction {
    /// Deployment the call configures
    pub contract: ContractDescriptor,
    /// Resolved address of `contract`
    pub to: Address,
    /// EIP-155 chain id of the network the call is sent on, if EVM
    pub chain_id: Option<u64>,
    pub call: WireCall,
    pub calldata: Bytes,
}

impl WireTransaction {
    /// Endpoint of the network the call is sent on
    pub fn endpoint(&self) -> EndpointId {
        self.contract.endpoint()
    }
}

impl fmt::Display for WireTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} at {}", self.call, self.contract, self.to)
    }
}

/// Ordered transactions that bring deployments in line with a topology
///
/// Order: `setPeer` for every connection, `setEnforcedOptions` for every
/// connection carrying options, then `setDelegate` and finally
/// `transferOwnership` for every contract whose config names one. Ownership
/// goes last since the new owner is usually not the account executing the plan.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::Address;
/// use oapp_topology::{deployment::voting_topology, DeploymentBook, WireCall, WirePlan};
///
/// let topology = voting_topology()?;
/// let book = topology
///     .descriptors()
///     .enumerate()
///     .fold(DeploymentBook::new(), |book, (i, d)| {
///         book.with(d.clone(), Address::with_last_byte(i as u8 + 1))
///     });
///
/// let plan = WirePlan::build(&topology, &book)?;
/// assert_eq!(plan.len(), 6);
/// assert!(plan.iter().all(|tx| tx.call == WireCall::SetPeer));
/// # Ok::<(), oapp_topology::TopologyError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WirePlan {
    transactions: Vec<WireTransaction>,
}

impl WirePlan {
    pub fn build<R>(topology: &TopologyConfig, resolver: &R) -> Result<Self>
    where
        R: DeploymentResolver + ?Sized,
    {
        let span = spans::build_wire_plan(topology.contract_count(), topology.connection_count());
        let _guard = span.enter();

        let plan = Self::build_inner(topology, resolver).inspect_err(spans::record_error)?;

        span.record("transactions", plan.len());
        info!(transactions = plan.len(), event = "wire_plan_built");
        Ok(plan)
    }

    fn build_inner<R>(topology: &TopologyConfig, resolver: &R) -> Result<Self>
    where
        R: DeploymentResolver + ?Sized,
    {
        let mut addresses: HashMap<&ContractDescriptor, Address> =
            HashMap::with_capacity(topology.contract_count());
        for descriptor in topology.descriptors() {
            let span = spans::resolve_deployment(descriptor);
            let _guard = span.enter();

            let address = resolver.resolve(descriptor)?;
            debug!(address = %address, event = "deployment_resolved");
            addresses.insert(descriptor, address);
        }

        let address_of = |descriptor: &ContractDescriptor| -> Result<Address> {
            addresses
                .get(descriptor)
                .copied()
                .ok_or_else(|| TopologyError::UnresolvedDeployment {
                    descriptor: descriptor.to_string(),
                })
        };

        let mut plan = Self::default();

        for connection in topology.connections() {
            let peer = address_of(connection.to())?;
            let call = IOApp::setPeerCall {
                _eid: connection.to().endpoint().as_u32(),
                _peer: peer.into_word(),
            };
            plan.push(
                connection.from(),
                address_of(connection.from())?,
                WireCall::SetPeer,
                call.abi_encode(),
            );
        }

        for connection in topology.connections() {
            let Some(config) = connection.config() else {
                continue;
            };
            let params: Vec<EnforcedOptionParam> = config
                .encoded_options()
                .into_iter()
                .map(|(msg_type, options)| EnforcedOptionParam {
                    eid: connection.to().endpoint().as_u32(),
                    msgType: msg_type,
                    options,
                })
                .collect();
            if params.is_empty() {
                continue;
            }

            let call = IOApp::setEnforcedOptionsCall {
                _enforcedOptions: params,
            };
            plan.push(
                connection.from(),
                address_of(connection.from())?,
                WireCall::SetEnforcedOptions,
                call.abi_encode(),
            );
        }

        for node in topology.contracts() {
            if let Some(delegate) = node.config().and_then(|c| c.delegate()) {
                let call = IOApp::setDelegateCall {
                    _delegate: delegate,
                };
                plan.push(
                    node.contract(),
                    address_of(node.contract())?,
                    WireCall::SetDelegate,
                    call.abi_encode(),
                );
            }
        }

        for node in topology.contracts() {
            if let Some(owner) = node.config().and_then(|c| c.owner()) {
                let call = IOApp::transferOwnershipCall { newOwner: owner };
                plan.push(
                    node.contract(),
                    address_of(node.contract())?,
                    WireCall::TransferOwnership,
                    call.abi_encode(),
                );
            }
        }

        Ok(plan)
    }

    fn push(
        &mut self,
        contract: &ContractDescriptor,
        to: Address,
        call: WireCall,
        calldata: Vec<u8>,
    ) {
        self.transactions.push(WireTransaction {
            contract: contract.clone(),
            to,
            chain_id: contract.endpoint().evm_chain_id(),
            call,
            calldata: calldata.into(),
        });
    }

    pub fn transactions(&self) -> &[WireTransaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &WireTransaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions sent on `endpoint`, in plan order
    pub fn for_endpoint(&self, endpoint: EndpointId) -> impl Iterator<Item = &WireTransaction> {
        self.transactions
            .iter()
            .filter(move |tx| tx.endpoint() == endpoint)
    }
}

impl IntoIterator for WirePlan {
    type Item = WireTransaction;
    type IntoIter = std::vec::IntoIter<WireTransaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}
