//! Candidate selection for reconnection proposals.
//!
//! Each component nominates exactly one member as its attachment point for
//! new links. The default is the minimum member id (covers isolated and
//! link-less components); it is overwritten by the smaller endpoint of the
//! cheapest forest link inside the component, the idea being that the
//! cheapest internal connection marks the component's best-connected spot.

use std::collections::BTreeMap;

use crate::{graph::Link, partition::ComponentMap};

/// Chooses one candidate node per component.
///
/// Tie-breaking on equal costs is first-seen-wins: the comparison is a
/// strict `<`, so a later forest link with the same cost never displaces an
/// earlier one. Combined with the stable cost sort in the forest builder,
/// the full ordering chain is: input order → stable sort → forest acceptance
/// order → first strict minimum.
///
/// Every forest link has both endpoints inside one component by
/// construction, so a single root lookup per link suffices.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use relink_core::{Link, select_candidates};
///
/// let components = BTreeMap::from([(0, vec![0, 1, 2]), (3, vec![3, 4])]);
/// let forest = vec![Link::new(3, 4, 1), Link::new(1, 2, 2), Link::new(0, 1, 3)];
/// let candidates = select_candidates(&components, &forest);
/// assert_eq!(candidates[&0], 1);
/// assert_eq!(candidates[&3], 3);
/// ```
#[must_use]
pub fn select_candidates(components: &ComponentMap, forest: &[Link]) -> BTreeMap<usize, usize> {
    // Fallback: the minimum member id. Members are ascending, so the first
    // entry is the minimum; an empty component cannot occur by construction
    // but falls back to its root.
    let mut candidates: BTreeMap<usize, usize> = components
        .iter()
        .map(|(root, members)| (*root, members.first().copied().unwrap_or(*root)))
        .collect();

    // Members are ascending, so the last entry of each component is its
    // maximum; size the node→root table off the overall maximum id.
    let node_count = components
        .values()
        .filter_map(|members| members.last())
        .max()
        .map_or(0, |max_id| max_id.saturating_add(1));
    let mut root_of = vec![0usize; node_count];
    for (root, members) in components {
        for &member in members {
            root_of[member] = *root;
        }
    }

    let mut best_cost: BTreeMap<usize, u64> = BTreeMap::new();

    for link in forest {
        let root = root_of[link.source()];
        let best = best_cost.entry(root).or_insert(u64::MAX);
        if link.cost() < *best {
            *best = link.cost();
            let (min_endpoint, _) = link.normalized();
            candidates.insert(root, min_endpoint);
        }
    }

    candidates
}
