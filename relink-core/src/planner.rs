//! Reconnection planning: the minimal link set that re-merges all components.
//!
//! `k` components need exactly `k - 1` new links; the planner produces them
//! by chaining the candidates of root-ascending components. Chaining (rather
//! than, say, a star) matches how the proposals read back to an operator:
//! each proposal bridges two neighbouring fragments.

use std::collections::BTreeMap;

use tracing::warn;

use crate::partition::ComponentMap;

/// A proposed new link between two component candidates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ProposedLink {
    source: usize,
    target: usize,
}

impl ProposedLink {
    /// Returns the candidate from the earlier component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the candidate from the later component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns `true` when both endpoints collapsed onto the same node.
    ///
    /// This only happens when a single-node component's forced candidate
    /// equals the adjacent candidate and no substitute member exists.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.source == self.target
    }
}

/// An ordered set of proposed links restoring full connectivity.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReconnectionPlan {
    links: Vec<ProposedLink>,
}

impl ReconnectionPlan {
    /// Returns the proposed links in chain order.
    #[must_use]
    pub fn links(&self) -> &[ProposedLink] {
        &self.links
    }

    /// Returns `true` when no new links are required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the first degenerate proposal, if any.
    #[must_use]
    pub fn degenerate_link(&self) -> Option<ProposedLink> {
        self.links.iter().copied().find(ProposedLink::is_degenerate)
    }
}

/// Chains component candidates into `k - 1` proposed links.
///
/// Components are visited in ascending representative order. When two
/// neighbouring candidates collide on the same node id, the second endpoint
/// is substituted with the smallest member of its component distinct from
/// the colliding id; if the component has no such member the degenerate
/// self-referencing proposal is kept (callers decide whether to tolerate or
/// reject it).
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use relink_core::plan_reconnection;
///
/// let components = BTreeMap::from([(0, vec![0, 1, 2]), (3, vec![3, 4])]);
/// let candidates = BTreeMap::from([(0, 1), (3, 3)]);
/// let plan = plan_reconnection(&components, &candidates);
/// assert_eq!(plan.links().len(), 1);
/// assert_eq!(plan.links()[0].source(), 1);
/// assert_eq!(plan.links()[0].target(), 3);
/// ```
#[must_use]
pub fn plan_reconnection(
    components: &ComponentMap,
    candidates: &BTreeMap<usize, usize>,
) -> ReconnectionPlan {
    let roots: Vec<usize> = components.keys().copied().collect();
    if roots.len() <= 1 {
        return ReconnectionPlan::default();
    }

    let mut links = Vec::with_capacity(roots.len() - 1);
    for pair in roots.windows(2) {
        let (first_root, second_root) = (pair[0], pair[1]);
        let source = candidates.get(&first_root).copied().unwrap_or(first_root);
        let mut target = candidates.get(&second_root).copied().unwrap_or(second_root);

        if source == target {
            match substitute_member(components, second_root, source) {
                Some(alternative) => target = alternative,
                None => {
                    warn!(
                        component = second_root,
                        node = source,
                        "no alternative candidate, keeping degenerate proposal"
                    );
                }
            }
        }

        links.push(ProposedLink { source, target });
    }

    ReconnectionPlan { links }
}

/// Smallest member of `root`'s component distinct from `collision`.
fn substitute_member(components: &ComponentMap, root: usize, collision: usize) -> Option<usize> {
    components
        .get(&root)?
        .iter()
        .copied()
        .find(|&member| member != collision)
}
