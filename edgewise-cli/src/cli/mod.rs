//! Command-line interface for the edgewise graph generator.
//!
//! A single `generate` command draws a graph, renders it to stdout as text or
//! JSON and can additionally export the adjacency matrix as CSV.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, OutputFormat, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
