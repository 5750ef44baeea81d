//! Argument parsing and command execution for the edgewise CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use edgewise_core::{
    AdjacencyMatrix, DEFAULT_EDGE_COUNT, DEFAULT_NODE_COUNT, GraphError, GraphRequest,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::export::{CsvAdjacencyExporter, Exporter};
use crate::render::{GraphReport, JsonRenderer, Renderer, TextRenderer};

/// Upper bound of `--nodes`; mirrors [`edgewise_core::MAX_NODE_COUNT`].
pub(super) const NODE_ARG_CEILING: u64 = 200;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "edgewise",
    about = "Generate random undirected graphs and report on their structure."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Draw a random graph and print its summary, degrees and adjacency matrix.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes, between 1 and 200.
    #[arg(
        long,
        default_value_t = DEFAULT_NODE_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=NODE_ARG_CEILING),
    )]
    pub nodes: usize,

    /// Number of edges; values above the complete graph's size are clamped.
    #[arg(long, default_value_t = DEFAULT_EDGE_COUNT)]
    pub edges: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print bare node indices instead of `V{i}` labels.
    #[arg(long)]
    pub no_labels: bool,

    /// Also write the adjacency matrix as CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,
}

/// Report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing an export file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the report to the output stream failed.
    #[error("failed to render report: {source}")]
    Render {
        /// Underlying write failure.
        #[source]
        source: io::Error,
    },
    /// The graph request was rejected.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Generated graph and its derived views.
    pub report: GraphReport,
    /// Format requested for stdout.
    pub format: OutputFormat,
    /// Whether text output labels nodes as `V{i}`.
    pub show_labels: bool,
    /// CSV file written, if any.
    pub exported: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the request is invalid or the export fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use edgewise_cli::cli::{Cli, Command, GenerateCommand, OutputFormat, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 6,
///         edges: 6,
///         seed: Some(42),
///         format: OutputFormat::Text,
///         no_labels: false,
///         export_csv: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.summary.edge_count(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_command(generate)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        edges = command.edges,
        seed = field::Empty,
        format = command.format.as_str(),
    ),
)]
pub(super) fn run_command(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let request = GraphRequest::new()
        .with_node_count(command.nodes)
        .with_edge_count(command.edges)
        .with_optional_seed(command.seed)
        .build()?;
    if let Some(seed) = request.seed() {
        Span::current().record("seed", seed);
    }

    let graph = request.generate();
    let report = GraphReport::new(graph, request.requested_edge_count(), request.seed());

    if let Some(path) = &command.export_csv {
        export_csv(&report.adjacency, path)?;
    }

    info!(
        edges = report.summary.edge_count(),
        components = report.summary.component_count(),
        clamped = request.is_clamped(),
        "command completed"
    );
    Ok(ExecutionSummary {
        report,
        format: command.format,
        show_labels: !command.no_labels,
        exported: command.export_csv,
    })
}

#[instrument(name = "cli.export_csv", err, skip_all, fields(path = field::Empty))]
pub(super) fn export_csv(matrix: &AdjacencyMatrix, path: &Path) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    let io_error = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    CsvAdjacencyExporter
        .export(matrix, &mut writer)
        .map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    info!(rows = matrix.size(), "adjacency matrix exported");
    Ok(())
}

/// Renders `summary` to `writer` in the format it requested.
///
/// # Errors
/// Returns [`CliError::Render`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use edgewise_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use edgewise_cli::render::GraphReport;
/// # use edgewise_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     report: GraphReport::new(Graph::empty(1), 0, None),
///     format: OutputFormat::Text,
///     show_labels: true,
///     exported: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("components: 1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> Result<(), CliError> {
    let text = TextRenderer::new(summary.show_labels);
    let renderer: &dyn Renderer = match summary.format {
        OutputFormat::Text => &text,
        OutputFormat::Json => &JsonRenderer,
    };
    renderer
        .render(&summary.report, &mut writer)
        .map_err(|source| CliError::Render { source })?;
    if summary.format == OutputFormat::Json {
        return Ok(());
    }
    if let Some(path) = &summary.exported {
        writeln!(writer, "\nadjacency matrix written to {}", path.display())
            .map_err(|source| CliError::Render { source })?;
    }
    Ok(())
}
