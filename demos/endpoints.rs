// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Lists the known LayerZero endpoints and the voting topology's peers
//!
//! Run with: `cargo run --example endpoints`

use oapp_topology::deployment::voting_topology;
use oapp_topology::{EndpointId, Stage, TopologyError};

fn main() -> Result<(), TopologyError> {
    println!("LayerZero V2 Endpoints");
    println!("======================\n");

    display_endpoints(Stage::Mainnet);
    display_endpoints(Stage::Testnet);

    display_peer_matrix()?;

    Ok(())
}

fn display_endpoints(stage: Stage) {
    println!("{stage}:");
    for eid in EndpointId::all().iter().filter(|eid| eid.stage() == stage) {
        match eid.evm_chain_id() {
            Some(chain_id) => println!(
                "  {:<32} {:<24} chain id {chain_id}",
                eid.to_string(),
                eid.key()
            ),
            None => println!("  {:<32} {:<24} non-EVM", eid.to_string(), eid.key()),
        }
    }
    println!();
}

fn display_peer_matrix() -> Result<(), TopologyError> {
    let topology = voting_topology()?;

    println!("Voting topology peers:\n");
    for descriptor in topology.descriptors() {
        let peers: Vec<String> = topology
            .peers_of(descriptor)
            .map(|peer| peer.endpoint().name().to_string())
            .collect();
        println!("  {descriptor} trusts {}", peers.join(", "));
    }

    Ok(())
}
