//! Brute-force spanning forest oracle.
//!
//! Exhaustively enumerates acyclic link subsets and returns the cheapest
//! one that preserves the input's component partition. Exponential in the
//! link count, so only oracle-sized fixtures (see the strategies module)
//! ever reach it.

use crate::{forest::DisjointSet, graph::Link};

/// Result of the brute-force search.
#[derive(Clone, Copy, Debug)]
pub(super) struct OracleResult {
    /// Total cost of the cheapest spanning forest.
    pub total_cost: u64,
    /// Number of connected components in the input graph.
    pub component_count: usize,
}

/// Finds the minimum spanning forest cost by exhaustive subset search.
///
/// A subset is a spanning forest iff it is acyclic and has as many
/// components as the full graph: an acyclic subset always refines the full
/// partition, and a refinement with an equal component count is the same
/// partition.
pub(super) fn brute_force_forest(node_count: usize, links: &[Link]) -> OracleResult {
    let component_count = count_components(node_count, links);
    assert!(
        links.len() <= 20,
        "oracle input too large: {} links",
        links.len(),
    );

    let mut best = u64::MAX;
    for mask in 0u32..(1u32 << links.len()) {
        let subset: Vec<Link> = links
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, link)| *link)
            .collect();

        if let Some(cost) = forest_cost(node_count, &subset, component_count) {
            best = best.min(cost);
        }
    }

    OracleResult {
        total_cost: if best == u64::MAX { 0 } else { best },
        component_count,
    }
}

/// Returns the subset's total cost when it forms a spanning forest.
fn forest_cost(node_count: usize, subset: &[Link], component_count: usize) -> Option<u64> {
    let mut dsu = DisjointSet::new(node_count);
    let mut total = 0u64;
    for link in subset {
        if !dsu.union_roots(link.source(), link.target()) {
            return None;
        }
        total += link.cost();
    }
    (dsu.components() == component_count).then_some(total)
}

fn count_components(node_count: usize, links: &[Link]) -> usize {
    let mut dsu = DisjointSet::new(node_count);
    for link in links {
        let _ = dsu.union_roots(link.source(), link.target());
    }
    dsu.components()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_triangle() {
        let links = vec![
            Link::new(0, 1, 1),
            Link::new(1, 2, 2),
            Link::new(0, 2, 3),
        ];
        let result = brute_force_forest(3, &links);
        assert_eq!(result.total_cost, 3);
        assert_eq!(result.component_count, 1);
    }

    #[test]
    fn oracle_square_skips_heaviest() {
        let links = vec![
            Link::new(0, 1, 1),
            Link::new(1, 2, 2),
            Link::new(2, 3, 3),
            Link::new(3, 0, 4),
        ];
        let result = brute_force_forest(4, &links);
        assert_eq!(result.total_cost, 6);
        assert_eq!(result.component_count, 1);
    }

    #[test]
    fn oracle_disconnected_pair() {
        let links = vec![Link::new(0, 1, 1), Link::new(2, 3, 2)];
        let result = brute_force_forest(5, &links);
        assert_eq!(result.total_cost, 3);
        assert_eq!(result.component_count, 3);
    }

    #[test]
    fn oracle_linkless_graph() {
        let result = brute_force_forest(3, &[]);
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.component_count, 3);
    }
}
