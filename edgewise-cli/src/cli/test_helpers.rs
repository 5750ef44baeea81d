//! Small helpers shared across CLI tests.

use std::path::Path;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, GenerateCommand, OutputFormat};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn generate_command(nodes: usize, edges: usize, seed: Option<u64>) -> GenerateCommand {
    GenerateCommand {
        nodes,
        edges,
        seed,
        format: OutputFormat::Text,
        no_labels: false,
        export_csv: None,
    }
}

pub(super) fn run_command_expecting_error(cmd: GenerateCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

/// Parses a CSV adjacency export back into its header and numeric rows.
pub(super) fn read_csv_matrix(path: &Path) -> (Vec<String>, Vec<Vec<u8>>) {
    let mut reader = csv::Reader::from_path(path).expect("export must be readable");
    let header = reader
        .headers()
        .expect("export must contain a header")
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("rows must be well-formed")
                .iter()
                .skip(1)
                .map(|cell| cell.parse().expect("cells must be numeric"))
                .collect()
        })
        .collect();
    (header, rows)
}
