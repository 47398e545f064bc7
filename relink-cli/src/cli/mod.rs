//! Command-line interface orchestration for the relink engine.
//!
//! The CLI offers a `simulate` command that loads a JSON dataset, optionally
//! removes a blocked link, and reports connectivity plus reconnection
//! proposals, and a `generate` command that writes a seeded random dataset
//! in the same format.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutcome, ExecutionSummary, GenerateArgs, SimulateArgs,
    render_summary, run_cli,
};
