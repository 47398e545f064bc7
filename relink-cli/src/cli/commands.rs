//! Command implementations and argument parsing for the relink CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use relink_core::{
    ConnectivityReport, DegeneratePolicy, GeneratorConfig, GeneratorError, GraphError,
    RelinkBuilder, generate_graph,
};

use crate::records::{Dataset, MemberRecord, RecordsError};

const DEFAULT_NODES: usize = 10;
const DEFAULT_TARGET_LINKS: usize = 18;
const DEFAULT_COST_MIN: u64 = 1;
const DEFAULT_COST_MAX: u64 = 10;
const DEFAULT_SEED: u64 = 7;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "relink", about = "Analyse and repair network connectivity.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a connectivity analysis, optionally blocking one link first.
    Simulate(SimulateArgs),
    /// Generate a seeded random dataset in the simulate input format.
    Generate(GenerateArgs),
}

/// Options accepted by the `simulate` command.
#[derive(Debug, Args, Clone)]
pub struct SimulateArgs {
    /// Directory containing `members.json` and `links.json`.
    pub data_dir: PathBuf,

    /// First endpoint of the link to block.
    #[arg(long, requires = "block_target")]
    pub block_source: Option<usize>,

    /// Second endpoint of the link to block.
    #[arg(long, requires = "block_source")]
    pub block_target: Option<usize>,

    /// Fail instead of flagging when a reconnection proposal degenerates
    /// into a self-link.
    #[arg(long)]
    pub reject_degenerate: bool,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Directory to write `members.json` and `links.json` into.
    pub out_dir: PathBuf,

    /// Number of nodes to generate.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Total number of links to aim for, spanning tree included.
    #[arg(long = "links", default_value_t = DEFAULT_TARGET_LINKS)]
    pub target_links: usize,

    /// Inclusive lower bound for link costs.
    #[arg(long, default_value_t = DEFAULT_COST_MIN)]
    pub cost_min: u64,

    /// Inclusive upper bound for link costs.
    #[arg(long, default_value_t = DEFAULT_COST_MAX)]
    pub cost_max: u64,

    /// Seed for the random source; identical seeds reproduce the dataset.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed outside the dataset layer.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Dataset loading or storing failed.
    #[error(transparent)]
    Records(#[from] RecordsError),
    /// Core connectivity analysis failed.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// Random dataset generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// What a CLI command produced.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// A connectivity analysis finished.
    Simulated {
        /// The engine's report.
        report: ConnectivityReport,
        /// The dataset it ran over, kept for member labels.
        dataset: Dataset,
    },
    /// A dataset was generated and written to disk.
    Generated {
        /// Number of nodes written.
        nodes: usize,
        /// Number of links written.
        links: usize,
        /// Seed the dataset derives from.
        seed: u64,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the dataset directory.
    pub data_source: String,
    /// Command outcome to render.
    pub outcome: CommandOutcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, analysis, or generation fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Simulate(args) => {
            Span::current().record("command", field::display("simulate"));
            run_simulate(args)
        }
        Command::Generate(args) => {
            Span::current().record("command", field::display("generate"));
            run_generate(args)
        }
    }
}

#[instrument(
    name = "cli.simulate",
    err,
    skip(args),
    fields(data_dir = field::Empty, blockage = field::Empty),
)]
pub(super) fn run_simulate(args: SimulateArgs) -> Result<ExecutionSummary, CliError> {
    let SimulateArgs {
        data_dir,
        block_source,
        block_target,
        reject_degenerate,
    } = args;
    let span = Span::current();
    span.record("data_dir", field::display(data_dir.display()));

    let dataset = Dataset::load(&data_dir)?;
    let graph = dataset.to_graph();

    let mut builder = RelinkBuilder::new();
    if let (Some(source), Some(target)) = (block_source, block_target) {
        span.record("blockage", field::display(format_args!("({source}, {target})")));
        builder = builder.with_blockage(source, target);
    }
    if reject_degenerate {
        builder = builder.with_degenerate_policy(DegeneratePolicy::Reject);
    }

    let report = builder.build().run(&graph)?;
    info!(
        components = report.component_count(),
        total_cost = report.forest().total_cost(),
        "simulation completed"
    );

    Ok(ExecutionSummary {
        data_source: derive_data_source_name(&data_dir),
        outcome: CommandOutcome::Simulated { report, dataset },
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(out_dir = field::Empty, nodes = field::Empty, seed = field::Empty),
)]
pub(super) fn run_generate(args: GenerateArgs) -> Result<ExecutionSummary, CliError> {
    let GenerateArgs {
        out_dir,
        nodes,
        target_links,
        cost_min,
        cost_max,
        seed,
    } = args;
    let span = Span::current();
    span.record("out_dir", field::display(out_dir.display()));
    span.record("nodes", field::display(nodes));
    span.record("seed", field::display(seed));

    let config = GeneratorConfig {
        nodes,
        target_links,
        cost_min,
        cost_max,
    };
    let graph = generate_graph(&config, seed)?;

    fs::create_dir_all(&out_dir).map_err(|source| CliError::Io {
        path: out_dir.clone(),
        source,
    })?;

    let dataset = Dataset {
        members: (0..graph.node_count())
            .map(|id| MemberRecord { id, name: None })
            .collect(),
        links: graph
            .links()
            .iter()
            .map(|link| crate::records::LinkRecord {
                source: link.source(),
                target: link.target(),
                cost: link.cost(),
            })
            .collect(),
    };
    dataset.store(&out_dir)?;

    info!(
        nodes = graph.node_count(),
        links = graph.links().len(),
        "dataset generated"
    );

    Ok(ExecutionSummary {
        data_source: derive_data_source_name(&out_dir),
        outcome: CommandOutcome::Generated {
            nodes: graph.node_count(),
            links: graph.links().len(),
            seed,
        },
    })
}

pub(super) fn derive_data_source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "dataset".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    match &summary.outcome {
        CommandOutcome::Simulated { report, dataset } => render_report(report, dataset, writer),
        CommandOutcome::Generated { nodes, links, seed } => {
            writeln!(writer, "generated {nodes} members, {links} links (seed {seed})")
        }
    }
}

fn render_report(
    report: &ConnectivityReport,
    dataset: &Dataset,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "nodes: {}", report.node_count())?;
    writeln!(writer, "active links: {}", report.active_link_count())?;

    if let Some(blockage) = report.blockage() {
        let (source, target) = blockage.requested();
        let status = if blockage.removed() {
            "removed"
        } else {
            "not found"
        };
        writeln!(writer, "blockage ({source}, {target}): {status}")?;
    }

    writeln!(writer, "components: {}", report.component_count())?;
    for component in report.components() {
        writeln!(
            writer,
            "  root={} candidate={} members={:?}",
            component.root(),
            dataset.label(component.candidate()),
            component.members(),
        )?;
    }

    writeln!(
        writer,
        "forest: {} links, total cost {}",
        report.forest().links().len(),
        report.forest().total_cost(),
    )?;
    for link in report.forest().links() {
        writeln!(
            writer,
            "  ({}, {}) cost={}",
            link.source(),
            link.target(),
            link.cost(),
        )?;
    }

    match report.reconnection() {
        None => writeln!(writer, "network is fully connected")?,
        Some(outcome) => {
            writeln!(writer, "proposed links ({}):", outcome.plan().links().len())?;
            for proposal in outcome.plan().links() {
                let marker = if proposal.is_degenerate() {
                    "  [degenerate]"
                } else {
                    ""
                };
                writeln!(
                    writer,
                    "  + connect {} <-> {}{marker}",
                    dataset.label(proposal.source()),
                    dataset.label(proposal.target()),
                )?;
            }
            let verdict = if outcome.validated() {
                "connectivity restored"
            } else {
                "proposals do NOT restore connectivity"
            };
            writeln!(writer, "validation: {verdict}")?;
        }
    }

    Ok(())
}
