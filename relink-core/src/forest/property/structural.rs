//! Structural invariant verification for the forest builder.
//!
//! For any forest produced from a fixture, verifies:
//!
//! - **Acyclicity** — no selected link closes a cycle.
//! - **Size law** — `links.len() == n - c` for `c` components.
//! - **Component preservation** — the forest has exactly as many components
//!   as the input graph.
//! - **Cost order** — selected links arrive in non-decreasing cost order.
//! - **DSU bookkeeping** — the component counter matches the number of
//!   distinct representatives.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::forest::{DisjointSet, kruskal_forest};
use crate::graph::Link;

use super::types::NetworkFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &NetworkFixture) -> TestCaseResult {
    let forest = kruskal_forest(fixture.node_count, &fixture.links).map_err(|e| {
        TestCaseError::fail(format!(
            "kruskal_forest failed: {e} (distribution={:?}, nodes={}, links={})",
            fixture.distribution,
            fixture.node_count,
            fixture.links.len(),
        ))
    })?;

    validate_cost_order(forest.links())?;
    let forest_components = validate_acyclicity(fixture.node_count, forest.links())?;
    validate_size_law(fixture.node_count, forest.links().len(), forest_components)?;

    let input_components = count_components(fixture.node_count, &fixture.links);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {} components but the input has {input_components}",
            forest.component_count(),
        )));
    }
    if forest_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "forest claims {} components but its links imply {forest_components}",
            forest.component_count(),
        )));
    }

    validate_total_cost(&forest)?;
    Ok(())
}

/// Runs the DSU bookkeeping property: after every union the component
/// counter equals the number of distinct roots.
pub(super) fn run_dsu_invariant_property(fixture: &NetworkFixture) -> TestCaseResult {
    let mut dsu = DisjointSet::new(fixture.node_count);
    for link in &fixture.links {
        let _ = dsu.union_roots(link.source(), link.target());

        let mut roots: Vec<usize> = (0..fixture.node_count)
            .map(|node| dsu.find_root(node))
            .collect();
        roots.sort_unstable();
        roots.dedup();

        if roots.len() != dsu.components() {
            return Err(TestCaseError::fail(format!(
                "component counter {} diverged from {} distinct roots",
                dsu.components(),
                roots.len(),
            )));
        }
    }
    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Verifies selected links arrive in non-decreasing cost order.
fn validate_cost_order(links: &[Link]) -> TestCaseResult {
    for pair in links.windows(2) {
        if pair[0].cost() > pair[1].cost() {
            return Err(TestCaseError::fail(format!(
                "selection order regressed: cost {} before {}",
                pair[0].cost(),
                pair[1].cost(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles in the forest output, returning the implied component
/// count on success.
fn validate_acyclicity(node_count: usize, links: &[Link]) -> core::result::Result<usize, TestCaseError> {
    let mut dsu = DisjointSet::new(node_count);
    for (index, link) in links.iter().enumerate() {
        if !dsu.union_roots(link.source(), link.target()) {
            return Err(TestCaseError::fail(format!(
                "link {index}: ({}, {}) creates a cycle",
                link.source(),
                link.target(),
            )));
        }
    }
    Ok(dsu.components())
}

/// Verifies the forest has exactly `n - c` links for `c` components.
fn validate_size_law(node_count: usize, actual: usize, component_count: usize) -> TestCaseResult {
    let expected = node_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "link count {actual}, expected n - c = {expected} (n={node_count}, c={component_count})",
        )));
    }
    Ok(())
}

/// Verifies the reported total matches the links it carries.
fn validate_total_cost(forest: &crate::forest::SpanningForest) -> TestCaseResult {
    let summed: u64 = forest.links().iter().map(Link::cost).sum();
    if summed != forest.total_cost() {
        return Err(TestCaseError::fail(format!(
            "total cost {} disagrees with summed link costs {summed}",
            forest.total_cost(),
        )));
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Counts connected components in the raw input.
fn count_components(node_count: usize, links: &[Link]) -> usize {
    let mut dsu = DisjointSet::new(node_count);
    for link in links {
        let _ = dsu.union_roots(link.source(), link.target());
    }
    dsu.components()
}
