//! Property-based tests for the connectivity core.
//!
//! Verifies the Kruskal forest builder against a brute-force oracle on
//! small graphs, validates structural invariants (acyclicity, size law,
//! component preservation, DSU bookkeeping), and exercises the full
//! blockage → reconnection pipeline round-trip over seeded fixtures with
//! varied cost distributions and topologies.

mod oracle;
mod strategies;
mod structural;
mod types;
