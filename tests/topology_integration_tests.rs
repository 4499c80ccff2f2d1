//! Integration tests for the voting topology and its wiring plan

use std::collections::HashSet;

use alloy_primitives::{Address, B256};
use alloy_sol_types::SolCall;
use oapp_topology::deployment::{
    arb_sepolia_contract, op_sepolia_contract, sepolia_contract, voting_topology,
    VOTING_CONTRACT_NAME,
};
use oapp_topology::testing::FakeDeploymentResolver;
use oapp_topology::{
    Connection, ContractDescriptor, EndpointId, IOApp, TopologyConfig, TopologyError, WireCall,
    WirePlan,
};
use rstest::rstest;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_three_distinct_contracts() {
    let topology = voting_topology().unwrap();

    assert_eq!(topology.contract_count(), 3);
    let distinct: HashSet<(EndpointId, &str)> = topology
        .descriptors()
        .map(|d| (d.endpoint(), d.contract_name()))
        .collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn test_every_connection_end_is_a_listed_contract() {
    let topology = voting_topology().unwrap();
    let listed: Vec<&ContractDescriptor> = topology.descriptors().collect();

    for connection in topology.connections() {
        assert!(listed.contains(&connection.from()), "{connection}");
        assert!(listed.contains(&connection.to()), "{connection}");
    }
}

#[test]
fn test_connections_form_complete_directed_graph() {
    let topology = voting_topology().unwrap();
    assert_eq!(topology.connection_count(), 6);

    let edges: HashSet<_> = topology.connections().iter().map(Connection::key).collect();
    assert_eq!(edges.len(), 6, "no duplicate edges");

    for from in topology.descriptors() {
        for to in topology.descriptors().filter(|to| *to != from) {
            assert!(edges.contains(&(from, to)), "missing {from} -> {to}");
        }
        assert!(!edges.contains(&(from, from)), "self edge on {from}");
    }
    assert!(topology.is_full_mesh());
}

#[test]
fn test_expected_edge_set() {
    let a = sepolia_contract();
    let b = op_sepolia_contract();
    let c = arb_sepolia_contract();

    let expected: HashSet<(ContractDescriptor, ContractDescriptor)> = [
        (a.clone(), b.clone()),
        (a.clone(), c.clone()),
        (b.clone(), a.clone()),
        (b.clone(), c.clone()),
        (c.clone(), a.clone()),
        (c, b),
    ]
    .into_iter()
    .collect();

    let actual: HashSet<(ContractDescriptor, ContractDescriptor)> = voting_topology()
        .unwrap()
        .connections()
        .iter()
        .map(|c| (c.from().clone(), c.to().clone()))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_rendered_connections() {
    let rendered = voting_topology()
        .unwrap()
        .connections()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    MyOAppVoting@Sepolia (40161) -> MyOAppVoting@Optimism Sepolia (40232)
    MyOAppVoting@Sepolia (40161) -> MyOAppVoting@Arbitrum Sepolia (40231)
    MyOAppVoting@Optimism Sepolia (40232) -> MyOAppVoting@Sepolia (40161)
    MyOAppVoting@Optimism Sepolia (40232) -> MyOAppVoting@Arbitrum Sepolia (40231)
    MyOAppVoting@Arbitrum Sepolia (40231) -> MyOAppVoting@Sepolia (40161)
    MyOAppVoting@Arbitrum Sepolia (40231) -> MyOAppVoting@Optimism Sepolia (40232)
    ");
}

#[test]
fn test_json_shape_and_roundtrip() {
    let topology = voting_topology().unwrap();
    let value: serde_json::Value = serde_json::from_str(&topology.to_json().unwrap()).unwrap();

    let sepolia = json!({"eid": 40161, "contractName": VOTING_CONTRACT_NAME});
    let op_sepolia = json!({"eid": 40232, "contractName": VOTING_CONTRACT_NAME});
    let arb_sepolia = json!({"eid": 40231, "contractName": VOTING_CONTRACT_NAME});
    assert_eq!(
        value,
        json!({
            "contracts": [
                {"contract": sepolia},
                {"contract": op_sepolia},
                {"contract": arb_sepolia},
            ],
            "connections": [
                {"from": sepolia, "to": op_sepolia},
                {"from": sepolia, "to": arb_sepolia},
                {"from": op_sepolia, "to": sepolia},
                {"from": op_sepolia, "to": arb_sepolia},
                {"from": arb_sepolia, "to": sepolia},
                {"from": arb_sepolia, "to": op_sepolia},
            ]
        })
    );

    let reparsed: TopologyConfig = serde_json::from_value(value).unwrap();
    assert_eq!(reparsed, topology);
}

#[test]
fn test_file_roundtrip() {
    init_tracing();
    let topology = voting_topology().unwrap();
    let path = std::env::temp_dir().join(format!(
        "oapp-topology-{}-roundtrip.json",
        std::process::id()
    ));

    topology.write_to_path(&path).unwrap();
    let loaded = TopologyConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, topology);
}

#[test]
fn test_missing_file() {
    let err = TopologyConfig::from_path("/nonexistent/oapp-topology.json").unwrap_err();
    assert!(matches!(err, TopologyError::Io(_)));
}

#[rstest]
#[case::duplicate_contract(
    r#"{"contracts": [
        {"contract": {"eid": 40161, "contractName": "MyOAppVoting"}},
        {"contract": {"eid": 40161, "contractName": "MyOAppVoting"}}
    ]}"#,
    "Duplicate contract"
)]
#[case::dangling_edge(
    r#"{"contracts": [{"contract": {"eid": 40161, "contractName": "MyOAppVoting"}}],
        "connections": [{"from": {"eid": 40161, "contractName": "MyOAppVoting"},
                         "to": {"eid": 40231, "contractName": "MyOAppVoting"}}]}"#,
    "references unknown contract MyOAppVoting@Arbitrum Sepolia (40231)"
)]
#[case::self_edge(
    r#"{"contracts": [{"contract": {"eid": 40161, "contractName": "MyOAppVoting"}}],
        "connections": [{"from": {"eid": 40161, "contractName": "MyOAppVoting"},
                         "to": {"eid": 40161, "contractName": "MyOAppVoting"}}]}"#,
    "to itself"
)]
#[case::unknown_endpoint(
    r#"{"contracts": [{"contract": {"eid": 101, "contractName": "MyOAppVoting"}}]}"#,
    "unknown LayerZero endpoint ID: 101"
)]
fn test_malformed_documents_rejected(#[case] json: &str, #[case] message: &str) {
    let err = TopologyConfig::from_json_str(json).unwrap_err();
    assert!(
        err.to_string().contains(message),
        "expected {message:?} in {err}"
    );
}

#[test]
fn test_wire_plan_sets_every_peer() {
    init_tracing();
    let topology = voting_topology().unwrap();
    let resolver = FakeDeploymentResolver::for_topology(&topology);

    let plan = WirePlan::build(&topology, &resolver).unwrap();
    assert_eq!(plan.len(), 6);

    for (tx, connection) in plan.iter().zip(topology.connections()) {
        assert_eq!(tx.call, WireCall::SetPeer);
        assert_eq!(&tx.contract, connection.from());
        assert_eq!(tx.chain_id, connection.from().endpoint().evm_chain_id());

        let call = IOApp::setPeerCall::abi_decode(&tx.calldata).unwrap();
        assert_eq!(call._eid, connection.to().endpoint().as_u32());

        let peer_index = topology
            .descriptors()
            .position(|d| d == connection.to())
            .unwrap();
        let peer = Address::with_last_byte(peer_index as u8 + 1);
        assert_eq!(call._peer, B256::left_padding_from(peer.as_slice()));
    }

    // each deployment is resolved once regardless of its degree
    for descriptor in topology.descriptors() {
        assert_eq!(resolver.lookup_count(descriptor), 1);
    }
    assert_eq!(resolver.total_lookups(), 3);
}

#[test]
fn test_wire_plan_stops_on_resolver_failure() {
    let topology = voting_topology().unwrap();
    let resolver = FakeDeploymentResolver::for_topology(&topology);
    resolver.add_failure(op_sepolia_contract());

    let err = WirePlan::build(&topology, &resolver).unwrap_err();
    assert!(matches!(err, TopologyError::Io(_)));

    // resolution is in contract order and stops at the first failure
    assert_eq!(resolver.lookup_count(&sepolia_contract()), 1);
    assert_eq!(resolver.lookup_count(&op_sepolia_contract()), 1);
    assert_eq!(resolver.lookup_count(&arb_sepolia_contract()), 0);
}

#[test]
fn test_wire_plan_unresolved_deployment() {
    let topology = voting_topology().unwrap();
    let resolver = FakeDeploymentResolver::new();
    resolver.add_deployment(sepolia_contract(), Address::with_last_byte(1));

    let err = WirePlan::build(&topology, &resolver).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No deployment found for MyOAppVoting@Optimism Sepolia (40232)"
    );
}
