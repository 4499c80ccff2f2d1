use alloy_chains::NamedChain;
use thiserror::Error;

use crate::protocol::{EndpointId, InvalidEndpointId};

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("Contract name must not be empty (endpoint {endpoint})")]
    EmptyContractName { endpoint: EndpointId },

    #[error("Duplicate contract: {descriptor}")]
    DuplicateContract { descriptor: String },

    #[error("Connection from {descriptor} to itself")]
    SelfConnection { descriptor: String },

    #[error("Connection {from} -> {to} references unknown contract {missing}")]
    DanglingConnection {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Connection {from} -> {to} peers two contracts on the same endpoint")]
    SameEndpointConnection { from: String, to: String },

    #[error("Duplicate connection: {from} -> {to}")]
    DuplicateConnection { from: String, to: String },

    #[error("Topology is not a full mesh, missing connection {from} -> {to}")]
    IncompleteMesh { from: String, to: String },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpointId(#[from] InvalidEndpointId),

    #[error("Chain not supported: {0}")]
    UnsupportedChain(NamedChain),

    #[error("No deployment found for {descriptor}")]
    UnresolvedDeployment { descriptor: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TopologyError>;
