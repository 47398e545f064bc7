//! Type definitions for the connectivity property-based tests.

use crate::graph::Link;

/// Cost distribution strategy for generated networks.
///
/// Controls how link costs and topology are assigned during generation,
/// producing inputs that stress different aspects of the forest builder and
/// the reconnection pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CostDistribution {
    /// Costs drawn from a wide range; ties are rare.
    Spread,
    /// Large groups of links share identical costs, stressing the stable
    /// tie-breaking chain.
    ManyIdentical,
    /// Sparse connected network: random spanning tree plus a few extras.
    Sparse,
    /// Multiple disconnected components with no cross-component links.
    Disconnected,
    /// Tiny dense network sized for the brute-force oracle.
    OracleSized,
}

/// Fixture for connectivity property tests.
///
/// Captures the node count, generated links, and the distribution used, so
/// failures carry full context.
#[derive(Clone, Debug)]
pub(super) struct NetworkFixture {
    /// Number of nodes in the network.
    pub node_count: usize,
    /// Generated links with costs.
    pub links: Vec<Link>,
    /// Distribution used during generation.
    pub distribution: CostDistribution,
}
