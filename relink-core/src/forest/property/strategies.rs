//! Strategy builders for the connectivity property-based tests.
//!
//! Provides seeded network generators covering the cost distributions in
//! [`CostDistribution`]. Each generator derives everything from a
//! caller-supplied [`SmallRng`], so a proptest seed fully determines the
//! fixture.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Link;

use super::types::{CostDistribution, NetworkFixture};

/// Minimum node count for most generated networks.
const MIN_NODES: usize = 6;
/// Maximum node count for most generated networks.
const MAX_NODES: usize = 48;
/// Node ceiling for oracle-sized fixtures (the brute-force oracle
/// enumerates link subsets, so both counts must stay tiny).
const ORACLE_MAX_NODES: usize = 7;
/// Link ceiling for oracle-sized fixtures.
const ORACLE_MAX_LINKS: usize = 14;

/// Generates fixtures covering all five cost distributions.
pub(super) fn network_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    (any::<u8>(), any::<u64>()).prop_map(|(selector, seed)| {
        let distribution = match selector % 5 {
            0 => CostDistribution::Spread,
            1 => CostDistribution::ManyIdentical,
            2 => CostDistribution::Sparse,
            3 => CostDistribution::Disconnected,
            _ => CostDistribution::OracleSized,
        };
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates oracle-sized fixtures only.
pub(super) fn oracle_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(CostDistribution::OracleSized, &mut rng)
    })
}

/// Generates a fixture for a specific cost distribution.
///
/// Also used directly by rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(
    distribution: CostDistribution,
    rng: &mut SmallRng,
) -> NetworkFixture {
    match distribution {
        CostDistribution::Spread => generate_probabilistic(rng, (1, 1_000), distribution),
        CostDistribution::ManyIdentical => generate_identical_costs(rng),
        CostDistribution::Sparse => generate_sparse(rng),
        CostDistribution::Disconnected => generate_disconnected(rng),
        CostDistribution::OracleSized => generate_oracle_sized(rng),
    }
}

/// Generates a network by probabilistically linking all unique node pairs
/// with costs drawn from `cost_range`.
fn generate_probabilistic(
    rng: &mut SmallRng,
    cost_range: (u64, u64),
    distribution: CostDistribution,
) -> NetworkFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let link_probability: f64 = rng.gen_range(0.2..=0.6);
    let mut links = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(link_probability) {
                links.push(Link::new(i, j, rng.gen_range(cost_range.0..=cost_range.1)));
            }
        }
    }

    NetworkFixture {
        node_count,
        links,
        distribution,
    }
}

/// Generates a network where large groups of links share the same cost.
///
/// This is the most important stress case: it exercises the stable sort and
/// the first-seen candidate tie-breaking.
fn generate_identical_costs(rng: &mut SmallRng) -> NetworkFixture {
    let pool_size = rng.gen_range(1..=3);
    let cost_pool: Vec<u64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();

    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let link_probability: f64 = rng.gen_range(0.3..=0.7);
    let mut links = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(link_probability) {
                let cost = cost_pool[rng.gen_range(0..cost_pool.len())];
                links.push(Link::new(i, j, cost));
            }
        }
    }

    NetworkFixture {
        node_count,
        links,
        distribution: CostDistribution::ManyIdentical,
    }
}

/// Generates a sparse connected network: a random spanning tree plus a
/// small number of extra links.
fn generate_sparse(rng: &mut SmallRng) -> NetworkFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut links = Vec::new();

    for node in 1..node_count {
        let anchor = rng.gen_range(0..node);
        links.push(Link::new(anchor, node, rng.gen_range(1..=100)));
    }

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i != j {
            links.push(Link::new(i, j, rng.gen_range(1..=100)));
        }
    }

    NetworkFixture {
        node_count,
        links,
        distribution: CostDistribution::Sparse,
    }
}

/// Generates a network with 2-5 disconnected components and no
/// cross-component links.
fn generate_disconnected(rng: &mut SmallRng) -> NetworkFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let node_count: usize = component_sizes.iter().sum();

    let mut links = Vec::new();
    let mut offset = 0;
    for &size in &component_sizes {
        for node in 1..size {
            let anchor = rng.gen_range(0..node);
            links.push(Link::new(offset + anchor, offset + node, rng.gen_range(1..=50)));
        }
        // Occasionally thicken the component beyond its tree.
        if size >= 3 && rng.gen_bool(0.5) {
            links.push(Link::new(offset, offset + size - 1, rng.gen_range(1..=50)));
        }
        offset += size;
    }

    NetworkFixture {
        node_count,
        links,
        distribution: CostDistribution::Disconnected,
    }
}

/// Generates a tiny network sized for exhaustive oracle comparison.
fn generate_oracle_sized(rng: &mut SmallRng) -> NetworkFixture {
    let node_count = rng.gen_range(2..=ORACLE_MAX_NODES);
    let mut links = Vec::new();

    'outer: for i in 0..node_count {
        for j in (i + 1)..node_count {
            if links.len() == ORACLE_MAX_LINKS {
                break 'outer;
            }
            if rng.gen_bool(0.7) {
                links.push(Link::new(i, j, rng.gen_range(1..=20)));
            }
        }
    }

    NetworkFixture {
        node_count,
        links,
        distribution: CostDistribution::OracleSized,
    }
}
