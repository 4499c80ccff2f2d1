// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Prints the wiring plan for a topology
//!
//! Environment variables (set these in .env file):
//! - TOPOLOGY_PATH: (optional) topology JSON, defaults to the voting topology
//! - DEPLOYMENTS_PATH: deployment address book JSON
//!   (`[{"eid": 40161, "contractName": "MyOAppVoting", "address": "0x..."}]`)
//!
//! Run with: `cargo run --example wire_plan`

use dotenvy::dotenv;
use oapp_topology::deployment::voting_topology;
use oapp_topology::{DeploymentBook, TopologyConfig, TopologyError, WirePlan};

fn main() -> Result<(), TopologyError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let topology = match std::env::var("TOPOLOGY_PATH") {
        Ok(path) => TopologyConfig::from_path(path)?,
        Err(_) => voting_topology()?,
    };

    println!("Topology");
    println!("========\n");
    for connection in topology.connections() {
        println!("  {connection}");
    }

    let Ok(deployments_path) = std::env::var("DEPLOYMENTS_PATH") else {
        println!("\nSet DEPLOYMENTS_PATH to print the wiring plan");
        return Ok(());
    };
    let book = DeploymentBook::from_path(deployments_path)?;

    let plan = WirePlan::build(&topology, &book)?;

    println!("\nWiring plan ({} transactions)", plan.len());
    println!("============\n");
    for (i, tx) in plan.iter().enumerate() {
        let chain_id = tx
            .chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>2}. {tx}", i + 1);
        println!("      chain id: {chain_id}");
        println!("      calldata: {}", tx.calldata);
    }

    Ok(())
}
