//! Result types for connectivity runs.
//!
//! A [`ConnectivityReport`] carries everything the presentation layer needs:
//! the blockage outcome, the spanning forest, the component partition with
//! per-component candidates, and — for fragmented networks — the proposed
//! reconnection links plus the validator's verdict.

use crate::{forest::SpanningForest, planner::ReconnectionPlan};

/// Outcome of a requested link blockage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockageOutcome {
    source: usize,
    target: usize,
    removed: bool,
}

impl BlockageOutcome {
    pub(crate) const fn new(source: usize, target: usize, removed: bool) -> Self {
        Self {
            source,
            target,
            removed,
        }
    }

    /// Returns the requested pair as supplied by the caller.
    #[must_use]
    pub const fn requested(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns `true` when at least one link matched and was removed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn removed(&self) -> bool { self.removed }
}

/// One connected component of the analysed network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentReport {
    root: usize,
    members: Vec<usize>,
    candidate: usize,
}

impl ComponentReport {
    pub(crate) const fn new(root: usize, members: Vec<usize>, candidate: usize) -> Self {
        Self {
            root,
            members,
            candidate,
        }
    }

    /// Returns the union-find representative of this component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> usize { self.root }

    /// Returns the member ids in ascending order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Returns the node chosen to anchor reconnection proposals.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidate(&self) -> usize { self.candidate }
}

/// Reconnection proposals plus the validator's verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReconnectionOutcome {
    plan: ReconnectionPlan,
    validated: bool,
}

impl ReconnectionOutcome {
    pub(crate) const fn new(plan: ReconnectionPlan, validated: bool) -> Self {
        Self { plan, validated }
    }

    /// Returns the proposed links.
    #[must_use]
    #[rustfmt::skip]
    pub const fn plan(&self) -> &ReconnectionPlan { &self.plan }

    /// Returns `true` when replaying surviving plus proposed links yields a
    /// single component. `false` signals an internal planning defect.
    #[must_use]
    #[rustfmt::skip]
    pub const fn validated(&self) -> bool { self.validated }
}

/// Represents the output of a [`crate::Relink::run`] invocation.
#[derive(Clone, Debug)]
pub struct ConnectivityReport {
    node_count: usize,
    active_link_count: usize,
    blockage: Option<BlockageOutcome>,
    forest: SpanningForest,
    components: Vec<ComponentReport>,
    reconnection: Option<ReconnectionOutcome>,
}

impl ConnectivityReport {
    pub(crate) const fn new(
        node_count: usize,
        active_link_count: usize,
        blockage: Option<BlockageOutcome>,
        forest: SpanningForest,
        components: Vec<ComponentReport>,
        reconnection: Option<ReconnectionOutcome>,
    ) -> Self {
        Self {
            node_count,
            active_link_count,
            blockage,
            forest,
            components,
            reconnection,
        }
    }

    /// Returns the number of nodes in the analysed graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of links that survived the blockage stage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn active_link_count(&self) -> usize { self.active_link_count }

    /// Returns the blockage outcome when a blockage was requested.
    #[must_use]
    #[rustfmt::skip]
    pub const fn blockage(&self) -> Option<&BlockageOutcome> { self.blockage.as_ref() }

    /// Returns the minimum-cost spanning forest of the surviving network.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the components in ascending root order.
    #[must_use]
    pub fn components(&self) -> &[ComponentReport] {
        &self.components
    }

    /// Returns the number of connected components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` when the surviving network is fully connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.components.len() == 1
    }

    /// Returns the reconnection outcome for fragmented networks.
    #[must_use]
    #[rustfmt::skip]
    pub const fn reconnection(&self) -> Option<&ReconnectionOutcome> { self.reconnection.as_ref() }
}
