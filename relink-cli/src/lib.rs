//! Library surface for the relink CLI.
//!
//! Exposes the command implementations and logging setup so integration
//! tests can drive them without spawning the binary.

pub mod cli;
pub mod logging;
pub mod records;
