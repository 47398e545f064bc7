//! Link blockage simulation.
//!
//! A blockage removes an undirected link from the active set before any
//! connectivity analysis runs. Matching is order-independent and removes
//! every occurrence of the pair, so latent parallel links disappear
//! together.

use crate::graph::Link;

/// Removes every link matching the unordered `blocked` pair.
///
/// Returns the surviving links (original order preserved) and whether at
/// least one link was removed. An absent pair is not an error: it yields
/// `false` and an unchanged list, which also makes the operation idempotent.
///
/// # Examples
/// ```
/// use relink_core::{Link, apply_blockage};
///
/// let links = vec![Link::new(0, 1, 3), Link::new(1, 0, 4), Link::new(1, 2, 2)];
/// let (surviving, removed) = apply_blockage(&links, (1, 0));
/// assert!(removed);
/// assert_eq!(surviving, vec![Link::new(1, 2, 2)]);
///
/// let (unchanged, removed_again) = apply_blockage(&surviving, (0, 1));
/// assert!(!removed_again);
/// assert_eq!(unchanged, surviving);
/// ```
#[must_use]
pub fn apply_blockage(links: &[Link], blocked: (usize, usize)) -> (Vec<Link>, bool) {
    let target = normalize(blocked);
    let mut surviving = Vec::with_capacity(links.len());
    let mut removed = false;

    for link in links {
        if link.normalized() == target {
            removed = true;
            continue;
        }
        surviving.push(*link);
    }

    (surviving, removed)
}

const fn normalize((a, b): (usize, usize)) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
