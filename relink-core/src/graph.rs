//! Value types describing the input network.
//!
//! A [`Graph`] is a dense node id space `[0, node_count)` plus a list of
//! undirected, weighted [`Link`]s. Links keep the endpoint order they were
//! supplied with; comparisons that must ignore direction go through
//! [`Link::normalized`].

/// An undirected, weighted connection between two nodes.
///
/// # Examples
/// ```
/// use relink_core::Link;
///
/// let link = Link::new(4, 1, 3);
/// assert_eq!(link.source(), 4);
/// assert_eq!(link.target(), 1);
/// assert_eq!(link.normalized(), (1, 4));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Link {
    source: usize,
    target: usize,
    cost: u64,
}

impl Link {
    /// Creates a link between `source` and `target` with the given cost.
    #[must_use]
    pub const fn new(source: usize, target: usize, cost: u64) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the link cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> u64 { self.cost }

    /// Returns the endpoints as an order-independent `(min, max)` pair.
    #[must_use]
    pub const fn normalized(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_link(&self) -> bool {
        self.source == self.target
    }
}

/// An immutable snapshot of the network under analysis.
///
/// # Examples
/// ```
/// use relink_core::{Graph, Link};
///
/// let graph = Graph::new(3, vec![Link::new(0, 1, 2), Link::new(1, 2, 5)]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.links().len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    node_count: usize,
    links: Vec<Link>,
}

impl Graph {
    /// Creates a graph over the dense id space `[0, node_count)`.
    #[must_use]
    pub const fn new(node_count: usize, links: Vec<Link>) -> Self {
        Self { node_count, links }
    }

    /// Creates a graph whose node count is inferred as
    /// `max(observed id) + 1` across the member ids and all link endpoints.
    ///
    /// Sparse id spaces waste a little memory but remain correct: unnamed
    /// ids become isolated singleton components.
    ///
    /// # Examples
    /// ```
    /// use relink_core::{Graph, Link};
    ///
    /// let graph = Graph::from_observed([0, 2], vec![Link::new(0, 4, 1)]);
    /// assert_eq!(graph.node_count(), 5);
    /// ```
    #[must_use]
    pub fn from_observed(members: impl IntoIterator<Item = usize>, links: Vec<Link>) -> Self {
        let member_max = members.into_iter().max();
        let link_max = links
            .iter()
            .map(|link| link.source().max(link.target()))
            .max();

        let node_count = match (member_max, link_max) {
            (None, None) => 0,
            (a, b) => a.unwrap_or(0).max(b.unwrap_or(0)).saturating_add(1),
        };

        Self { node_count, links }
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the links in their original order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}
