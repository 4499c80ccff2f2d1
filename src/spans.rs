//! Tracing span helpers for topology operations
//!
//! Static span names, structured attributes, and error recording kept apart
//! from the validation and planning logic.
//!
//! # Example
//!
//! ```rust
//! use oapp_topology::{spans, ValidationConfig};
//!
//! let span = spans::validate_topology(3, 6, &ValidationConfig::default());
//! let _guard = span.enter();
//! ```

use std::path::Path;

use tracing::Span;

use crate::{ContractDescriptor, EndpointId, ValidationConfig};

/// Create span for validating a topology.
///
/// Parent: caller (loading or construction site)
/// Children: None
#[inline]
pub fn validate_topology(contracts: usize, connections: usize, policy: &ValidationConfig) -> Span {
    tracing::info_span!(
        "oapp_topology.validate_topology",
        contracts = contracts,
        connections = connections,
        allow_same_endpoint_peers = policy.allow_same_endpoint_peers,
        require_full_mesh = policy.require_full_mesh,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for reading a topology from disk.
///
/// Parent: caller
/// Children: oapp_topology.validate_topology
#[inline]
pub fn load_topology(path: &Path) -> Span {
    tracing::info_span!(
        "oapp_topology.load_topology",
        path = %path.display(),
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for building a wiring plan.
///
/// Parent: caller
/// Children: oapp_topology.resolve_deployment (one per contract)
#[inline]
pub fn build_wire_plan(contracts: usize, connections: usize) -> Span {
    tracing::info_span!(
        "oapp_topology.build_wire_plan",
        contracts = contracts,
        connections = connections,
        transactions = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for resolving a single deployment address.
///
/// Parent: oapp_topology.build_wire_plan
/// Children: None
#[inline]
pub fn resolve_deployment(descriptor: &ContractDescriptor) -> Span {
    let endpoint: EndpointId = descriptor.endpoint();
    tracing::debug_span!(
        "oapp_topology.resolve_deployment",
        contract_name = descriptor.contract_name(),
        eid = endpoint.as_u32(),
        network = endpoint.name(),
    )
}

/// Record error attributes on the current span.
///
/// Should be called when an error occurs within an instrumented operation.
///
/// # Example
///
/// ```rust
/// use oapp_topology::{spans, TopologyConfig};
///
/// let span = tracing::info_span!(
///     "oapp_topology.operation",
///     error.type = tracing::field::Empty,
///     error.message = tracing::field::Empty,
///     otel.status_code = "OK",
/// );
/// let _guard = span.enter();
///
/// if let Err(e) = TopologyConfig::from_json_str("{}") {
///     spans::record_error(&e);
/// }
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");

    if let Some(source) = error.source() {
        current_span.record("error.source", source.to_string());
    }
}
