//! Union-find (disjoint set union) underpinning forest construction.
//!
//! Combines union-by-rank with two-pass path compression, giving amortized
//! near-constant cost per operation. The structure also tracks a live
//! component count so callers never have to re-derive it by scanning roots.

use crate::error::GraphError;

/// Disjoint set union over the dense id space `[0, len)`.
///
/// The public operations are bounds-checked and reject out-of-range ids with
/// [`GraphError::InvalidNodeId`] instead of corrupting state. Crate-internal
/// callers that have already validated their ids use the infallible
/// `*_root` variants.
///
/// # Examples
/// ```
/// use relink_core::DisjointSet;
///
/// let mut dsu = DisjointSet::new(4);
/// assert_eq!(dsu.components(), 4);
/// assert!(dsu.union(0, 1)?);
/// assert!(!dsu.union(1, 0)?);
/// assert!(dsu.connected(0, 1)?);
/// assert_eq!(dsu.components(), 3);
/// # Ok::<(), relink_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the size of the id space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the id space is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when `node` is outside the id
    /// space.
    pub fn find(&mut self, node: usize) -> Result<usize, GraphError> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` (a no-op) when both ids already share a
    /// representative; otherwise attaches the lower-rank root under the
    /// higher-rank root (on equal ranks `b`'s root goes under `a`'s root and
    /// `a`'s rank grows), decrements the component count, and returns `true`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when either id is outside the
    /// id space.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.union_roots(a, b))
    }

    /// Returns `true` when `a` and `b` share a representative.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when either id is outside the
    /// id space.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Infallible find for ids already known to be in `[0, len)`.
    ///
    /// First walks to the root, then repoints every node on the path
    /// directly at it.
    pub(crate) fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Infallible union for ids already known to be in `[0, len)`.
    pub(crate) fn union_roots(&mut self, a: usize, b: usize) -> bool {
        let mut left = self.find_root(a);
        let mut right = self.find_root(b);
        if left == right {
            return false;
        }
        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    fn check(&self, node: usize) -> Result<(), GraphError> {
        if node >= self.parent.len() {
            return Err(GraphError::InvalidNodeId {
                node,
                node_count: self.parent.len(),
            });
        }
        Ok(())
    }
}
