//! Builder utilities for configuring connectivity runs.
//!
//! Exposes the blockage selection and degenerate-proposal policy used before
//! constructing [`Relink`] instances.

use crate::relink::Relink;

/// Indicates how [`Relink::run`] treats a reconnection proposal whose
/// endpoints collapsed onto a single node.
///
/// Degenerate proposals only arise when a single-node component's forced
/// candidate collides with a neighbouring candidate and no substitute
/// member exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Keep the degenerate proposal in the plan, flagged and logged.
    Keep,
    /// Fail the run with [`crate::GraphError::DegenerateProposal`].
    Reject,
}

/// Configures and constructs [`Relink`] instances.
///
/// # Examples
/// ```
/// use relink_core::{DegeneratePolicy, RelinkBuilder};
///
/// let relink = RelinkBuilder::new()
///     .with_blockage(1, 2)
///     .with_degenerate_policy(DegeneratePolicy::Reject)
///     .build();
/// assert_eq!(relink.blockage(), Some((1, 2)));
/// assert_eq!(relink.degenerate_policy(), DegeneratePolicy::Reject);
/// ```
#[derive(Debug, Clone)]
pub struct RelinkBuilder {
    blockage: Option<(usize, usize)>,
    degenerate_policy: DegeneratePolicy,
}

impl Default for RelinkBuilder {
    fn default() -> Self {
        Self {
            blockage: None,
            degenerate_policy: DegeneratePolicy::Keep,
        }
    }
}

impl RelinkBuilder {
    /// Creates a builder with no blockage and the `Keep` policy.
    ///
    /// # Examples
    /// ```
    /// use relink_core::{DegeneratePolicy, RelinkBuilder};
    ///
    /// let builder = RelinkBuilder::new();
    /// assert_eq!(builder.blockage(), None);
    /// assert_eq!(builder.degenerate_policy(), DegeneratePolicy::Keep);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests removal of the undirected link `(source, target)` before
    /// analysis.
    #[must_use]
    pub const fn with_blockage(mut self, source: usize, target: usize) -> Self {
        self.blockage = Some((source, target));
        self
    }

    /// Returns the configured blockage pair, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn blockage(&self) -> Option<(usize, usize)> { self.blockage }

    /// Sets the policy applied to degenerate reconnection proposals.
    #[must_use]
    pub const fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Returns the currently configured degenerate-proposal policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn degenerate_policy(&self) -> DegeneratePolicy { self.degenerate_policy }

    /// Constructs a [`Relink`] instance from the configuration.
    #[must_use]
    pub const fn build(self) -> Relink {
        Relink::new(self.blockage, self.degenerate_policy)
    }
}
