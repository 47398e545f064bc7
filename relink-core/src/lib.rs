//! Relink core library.
//!
//! Relink maintains connectivity over a weighted, undirected network of
//! links: it builds a minimum-cost spanning forest with Kruskal's algorithm
//! over a union-find, simulates the removal ("blockage") of a specific link,
//! and, when the network fragments into `k` components, plans the `k - 1`
//! new links that restore full connectivity using a deterministic
//! candidate-selection rule.
//!
//! # Determinism
//!
//! Every stage is a pure function of its inputs. Ties are broken by explicit
//! rules (stable cost sort over the original link order, first-seen strict
//! minimum, root-ascending component order), so repeated runs over the same
//! input produce identical reports.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod blockage;
mod builder;
mod candidate;
mod error;
mod forest;
mod generator;
mod graph;
mod partition;
mod planner;
mod relink;
mod report;
mod validate;

#[cfg(test)]
mod test_utils;

pub use crate::{
    blockage::apply_blockage,
    builder::{DegeneratePolicy, RelinkBuilder},
    candidate::select_candidates,
    error::{GraphError, GraphErrorCode, Result},
    forest::{DisjointSet, SpanningForest, kruskal_forest},
    generator::{GeneratorConfig, GeneratorError, GeneratorErrorCode, generate_graph},
    graph::{Graph, Link},
    partition::{ComponentMap, extract_components},
    planner::{ProposedLink, ReconnectionPlan, plan_reconnection},
    relink::Relink,
    report::{BlockageOutcome, ComponentReport, ConnectivityReport, ReconnectionOutcome},
    validate::validate_reconnection,
};
