//! Connectivity-run orchestration for the Relink library.
//!
//! Provides the [`Relink`] runtime entry point chaining the pipeline stages:
//! blockage → spanning forest → component extraction → candidate selection →
//! reconnection planning → validation.

use tracing::{error, info, instrument, warn};

use crate::{
    blockage::apply_blockage,
    builder::DegeneratePolicy,
    candidate::select_candidates,
    error::{GraphError, Result},
    forest::kruskal_forest,
    graph::Graph,
    partition::extract_components,
    planner::plan_reconnection,
    report::{BlockageOutcome, ComponentReport, ConnectivityReport, ReconnectionOutcome},
    validate::validate_reconnection,
};

/// Entry point for running the connectivity pipeline.
///
/// # Examples
/// ```
/// use relink_core::{Graph, Link, RelinkBuilder};
///
/// let graph = Graph::new(
///     5,
///     vec![
///         Link::new(0, 1, 3),
///         Link::new(1, 2, 2),
///         Link::new(0, 2, 5),
///         Link::new(3, 4, 1),
///     ],
/// );
/// let report = RelinkBuilder::new().build().run(&graph)?;
/// assert_eq!(report.component_count(), 2);
/// let reconnection = report.reconnection().expect("fragmented network");
/// assert!(reconnection.validated());
/// # Ok::<(), relink_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Relink {
    blockage: Option<(usize, usize)>,
    degenerate_policy: DegeneratePolicy,
}

impl Relink {
    pub(crate) const fn new(
        blockage: Option<(usize, usize)>,
        degenerate_policy: DegeneratePolicy,
    ) -> Self {
        Self {
            blockage,
            degenerate_policy,
        }
    }

    /// Returns the blockage pair this instance will apply, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn blockage(&self) -> Option<(usize, usize)> { self.blockage }

    /// Returns the degenerate-proposal policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn degenerate_policy(&self) -> DegeneratePolicy { self.degenerate_policy }

    /// Executes the connectivity pipeline against `graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] for a node-less graph,
    /// [`GraphError::InvalidNodeId`] when a link endpoint falls outside the
    /// id space, and [`GraphError::DegenerateProposal`] when a degenerate
    /// proposal arises under [`DegeneratePolicy::Reject`].
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            node_count = graph.node_count(),
            links = graph.links().len(),
            blockage = ?self.blockage,
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<ConnectivityReport> {
        let node_count = graph.node_count();
        if node_count == 0 {
            warn!("graph has no nodes, returning error");
            return Err(GraphError::EmptyGraph);
        }

        let (surviving, blockage) = match self.blockage {
            Some((source, target)) => {
                let (surviving, removed) = apply_blockage(graph.links(), (source, target));
                if !removed {
                    info!(source, target, "blockage pair not present in link set");
                }
                (surviving, Some(BlockageOutcome::new(source, target, removed)))
            }
            None => (graph.links().to_vec(), None),
        };

        let mut forest = kruskal_forest(node_count, &surviving)?;
        let components = extract_components(node_count, forest.dsu_mut());
        let candidates = select_candidates(&components, forest.links());

        let reconnection = if components.len() > 1 {
            let plan = plan_reconnection(&components, &candidates);
            if let Some(degenerate) = plan.degenerate_link() {
                match self.degenerate_policy {
                    DegeneratePolicy::Reject => {
                        return Err(GraphError::DegenerateProposal {
                            node: degenerate.source(),
                        });
                    }
                    DegeneratePolicy::Keep => {
                        warn!(node = degenerate.source(), "plan contains degenerate proposal");
                    }
                }
            }

            let validated = validate_reconnection(node_count, &surviving, &plan)?;
            if !validated {
                // Must never happen with a correct planner; do not hide it.
                error!(
                    components = components.len(),
                    proposals = plan.links().len(),
                    "proposed links failed to restore full connectivity"
                );
            }
            Some(ReconnectionOutcome::new(plan, validated))
        } else {
            None
        };

        let component_reports: Vec<ComponentReport> = components
            .into_iter()
            .map(|(root, members)| {
                let candidate = candidates.get(&root).copied().unwrap_or(root);
                ComponentReport::new(root, members, candidate)
            })
            .collect();

        info!(
            components = component_reports.len(),
            forest_links = forest.links().len(),
            total_cost = forest.total_cost(),
            "connectivity run completed"
        );

        Ok(ConnectivityReport::new(
            node_count,
            surviving.len(),
            blockage,
            forest,
            component_reports,
            reconnection,
        ))
    }
}
