//! Minimum-cost spanning forest construction (Kruskal).
//!
//! The builder stable-sorts links ascending by cost — ties keep their
//! original relative order, which downstream candidate selection depends on —
//! and greedily accepts every link whose endpoints are still in different
//! components. The output is a minimum spanning tree when the input is
//! connected and a minimum spanning forest (one tree per fragment)
//! otherwise.

mod union_find;

use tracing::debug;

pub use self::union_find::DisjointSet;

use crate::{
    error::GraphError,
    graph::Link,
    partition::{ComponentMap, extract_components},
};

/// The output of a spanning forest computation.
///
/// Owns the final union-find state so later stages (component extraction)
/// can reuse it instead of replaying the union sequence.
#[derive(Clone, Debug)]
pub struct SpanningForest {
    links: Vec<Link>,
    total_cost: u64,
    dsu: DisjointSet,
}

impl SpanningForest {
    /// Returns the accepted links in selection order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the summed cost of the accepted links.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> u64 { self.total_cost }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.dsu.components()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_spanning_tree(&self) -> bool {
        self.dsu.components() == 1
    }

    /// Returns the component partition implied by the final union-find state.
    #[must_use]
    pub fn component_map(&self) -> ComponentMap {
        let mut dsu = self.dsu.clone();
        let node_count = dsu.len();
        extract_components(node_count, &mut dsu)
    }

    pub(crate) fn dsu_mut(&mut self) -> &mut DisjointSet {
        &mut self.dsu
    }
}

/// Computes a minimum-cost spanning forest over `node_count` nodes.
///
/// Self-links are accepted in the input but never selected (their union is a
/// no-op). Processing runs over the full sorted list so disconnected inputs
/// yield a spanning forest per fragment, stopping early once a single
/// component remains.
///
/// # Errors
///
/// Returns an error when:
/// - `node_count == 0`
/// - a link references a node id `>= node_count`
///
/// # Examples
/// ```
/// use relink_core::{Link, kruskal_forest};
///
/// let links = vec![
///     Link::new(0, 1, 3),
///     Link::new(1, 2, 2),
///     Link::new(0, 2, 5),
/// ];
/// let forest = kruskal_forest(3, &links)?;
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_cost(), 5);
/// # Ok::<(), relink_core::GraphError>(())
/// ```
pub fn kruskal_forest(node_count: usize, links: &[Link]) -> Result<SpanningForest, GraphError> {
    if node_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    validate_links(node_count, links)?;

    // Stable sort: equal costs keep the input's relative order, which pins
    // the forest acceptance order and everything derived from it.
    let mut sorted = links.to_vec();
    sorted.sort_by_key(Link::cost);

    let mut dsu = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    let mut total_cost = 0u64;

    for link in sorted {
        if dsu.union_roots(link.source(), link.target()) {
            total_cost = total_cost.saturating_add(link.cost());
            accepted.push(link);
            if dsu.components() == 1 {
                break;
            }
        }
    }

    debug!(
        node_count,
        links = links.len(),
        accepted = accepted.len(),
        components = dsu.components(),
        total_cost,
        "spanning forest built"
    );

    Ok(SpanningForest {
        links: accepted,
        total_cost,
        dsu,
    })
}

fn validate_links(node_count: usize, links: &[Link]) -> Result<(), GraphError> {
    for link in links {
        for node in [link.source(), link.target()] {
            if node >= node_count {
                return Err(GraphError::InvalidNodeId { node, node_count });
            }
        }
    }
    Ok(())
}


#[cfg(test)]
mod property;
