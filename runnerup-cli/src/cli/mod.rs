//! Command-line interface for the runnerup pipeline.
//!
//! The `solve` command reads a graph in the `n m` / `u v w` text format from
//! a file or stdin and reports its minimum and second-best spanning tree
//! costs.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, PathQueryArg, SolveCommand, TieBreakArg,
    render_summary, run_cli,
};
