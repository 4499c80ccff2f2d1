//! The `MyOAppVoting` deployment
//!
//! Three deployments of the voting OApp on Sepolia, OP Sepolia and Arbitrum
//! Sepolia, each peered with the other two.

use crate::{Connection, ContractDescriptor, EndpointId, Result, TopologyConfig};

pub const VOTING_CONTRACT_NAME: &str = "MyOAppVoting";

pub fn sepolia_contract() -> ContractDescriptor {
    ContractDescriptor::new(EndpointId::Sepolia, VOTING_CONTRACT_NAME)
}

pub fn op_sepolia_contract() -> ContractDescriptor {
    ContractDescriptor::new(EndpointId::OptimismSepolia, VOTING_CONTRACT_NAME)
}

pub fn arb_sepolia_contract() -> ContractDescriptor {
    ContractDescriptor::new(EndpointId::ArbitrumSepolia, VOTING_CONTRACT_NAME)
}

/// The voting OApp topology: a complete directed graph over the three testnets
///
/// # Example
///
/// ```rust
/// use oapp_topology::deployment::voting_topology;
///
/// let topology = voting_topology()?;
/// assert_eq!(topology.contract_count(), 3);
/// assert_eq!(topology.connection_count(), 6);
/// assert!(topology.is_full_mesh());
/// # Ok::<(), oapp_topology::TopologyError>(())
/// ```
pub fn voting_topology() -> Result<TopologyConfig> {
    let sepolia = sepolia_contract();
    let op_sepolia = op_sepolia_contract();
    let arb_sepolia = arb_sepolia_contract();

    TopologyConfig::new(
        vec![
            sepolia.clone().into(),
            op_sepolia.clone().into(),
            arb_sepolia.clone().into(),
        ],
        vec![
            Connection::new(sepolia.clone(), op_sepolia.clone()),
            Connection::new(sepolia.clone(), arb_sepolia.clone()),
            Connection::new(op_sepolia.clone(), sepolia.clone()),
            Connection::new(op_sepolia.clone(), arb_sepolia.clone()),
            Connection::new(arb_sepolia.clone(), sepolia),
            Connection::new(arb_sepolia, op_sepolia),
        ],
    )
}
