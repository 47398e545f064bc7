//! Component extraction from the final union-find state.

use std::collections::BTreeMap;

use crate::forest::DisjointSet;

/// Mapping from component representative to its ascending member ids.
///
/// The `BTreeMap` keeps representatives in ascending order, which later
/// stages rely on for deterministic chaining.
pub type ComponentMap = BTreeMap<usize, Vec<usize>>;

/// Groups every node in `[0, node_count)` under its representative.
///
/// Members are collected in ascending id order, so the first entry of each
/// component is its minimum id. The number of keys equals the union-find's
/// component count and the member lists partition the node range exactly.
///
/// # Examples
/// ```
/// use relink_core::{DisjointSet, extract_components};
///
/// let mut dsu = DisjointSet::new(4);
/// dsu.union(0, 2)?;
/// let components = extract_components(4, &mut dsu);
/// assert_eq!(components.len(), 3);
/// assert_eq!(components[&0], vec![0, 2]);
/// # Ok::<(), relink_core::GraphError>(())
/// ```
#[must_use]
pub fn extract_components(node_count: usize, dsu: &mut DisjointSet) -> ComponentMap {
    let mut components = ComponentMap::new();
    for node in 0..node_count.min(dsu.len()) {
        let root = dsu.find_root(node);
        components.entry(root).or_default().push(node);
    }
    components
}
