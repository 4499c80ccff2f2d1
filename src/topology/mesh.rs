//! Complete directed graph generation

use super::{Connection, ContractDescriptor};

/// Every ordered pair of distinct descriptors, in input order.
///
/// For `[A, B, C]` this yields `A->B, A->C, B->A, B->C, C->A, C->B`.
pub fn full_mesh_connections<'a>(
    descriptors: impl IntoIterator<Item = &'a ContractDescriptor>,
) -> Vec<Connection> {
    let descriptors: Vec<&ContractDescriptor> = descriptors.into_iter().collect();

    descriptors
        .iter()
        .enumerate()
        .flat_map(|(i, from)| {
            descriptors
                .iter()
                .enumerate()
                .filter(move |(j, _)| *j != i)
                .map(move |(_, to)| Connection::new((*from).clone(), (*to).clone()))
        })
        .collect()
}

/// Number of edges in the complete directed graph over `n` nodes
#[inline]
pub const fn full_mesh_size(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}
