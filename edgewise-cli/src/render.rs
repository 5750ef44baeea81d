//! Report assembly and rendering.
//!
//! A [`GraphReport`] bundles a generated graph with every derived view; a
//! [`Renderer`] turns it into bytes for the terminal.

use std::io::{self, Write};

use edgewise_core::{
    AdjacencyMatrix, DegreeTable, Graph, SummaryStats, adjacency_matrix, degrees, node_label,
    summary,
};
use serde::Serialize;

/// A generated graph together with its derived views.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    /// Seed used for sampling, when one was supplied.
    pub seed: Option<u64>,
    /// Edge count asked for before clamping.
    pub requested_edges: usize,
    /// Headline statistics.
    pub summary: SummaryStats,
    /// Degree of each node.
    pub degrees: DegreeTable,
    /// Degrees rescaled into `[0, 1]`, for colouring nodes by degree.
    pub normalised_degrees: Vec<f64>,
    /// Dense adjacency matrix.
    pub adjacency: AdjacencyMatrix,
    /// The graph itself.
    pub graph: Graph,
}

impl GraphReport {
    /// Derives every view of `graph`.
    ///
    /// # Examples
    /// ```
    /// use edgewise_cli::render::GraphReport;
    /// use edgewise_core::Graph;
    ///
    /// let report = GraphReport::new(Graph::complete(3), 3, None);
    /// assert_eq!(report.summary.component_count(), 1);
    /// assert_eq!(report.degrees.total(), 6);
    /// assert!(!report.is_clamped());
    /// ```
    #[must_use]
    pub fn new(graph: Graph, requested_edges: usize, seed: Option<u64>) -> Self {
        let degrees = degrees(&graph);
        Self {
            seed,
            requested_edges,
            summary: summary(&graph),
            normalised_degrees: degrees.normalised(),
            degrees,
            adjacency: adjacency_matrix(&graph),
            graph,
        }
    }

    /// Reports whether fewer edges were drawn than requested.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.graph.edge_count() < self.requested_edges
    }
}

/// Writes a [`GraphReport`] in some presentation format.
pub trait Renderer {
    /// Renders `report` into `writer`.
    ///
    /// # Errors
    /// Returns [`io::Error`] when writing fails.
    fn render(&self, report: &GraphReport, writer: &mut dyn Write) -> io::Result<()>;
}

/// Plain-text renderer: summary metrics, degree table and adjacency matrix.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// use edgewise_cli::render::{GraphReport, Renderer, TextRenderer};
/// use edgewise_core::Graph;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = GraphReport::new(Graph::from_edges(2, [(0, 1)])?, 1, Some(9));
/// let mut buffer = Vec::new();
/// TextRenderer::new(true).render(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("nodes: 2\nedges: 1\n"));
/// assert!(text.contains("V0\t1\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    show_labels: bool,
}

impl TextRenderer {
    /// Creates a renderer; `show_labels` selects `V3` over bare `3` labels.
    #[must_use]
    pub const fn new(show_labels: bool) -> Self {
        Self { show_labels }
    }

    fn label(self, node: usize) -> String {
        if self.show_labels {
            node_label(node)
        } else {
            node.to_string()
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, report: &GraphReport, writer: &mut dyn Write) -> io::Result<()> {
        let stats = &report.summary;
        writeln!(writer, "nodes: {}", stats.node_count())?;
        writeln!(writer, "edges: {}", stats.edge_count())?;
        writeln!(writer, "average degree: {:.2}", stats.average_degree())?;
        writeln!(writer, "components: {}", stats.component_count())?;
        if let Some(seed) = report.seed {
            writeln!(writer, "seed: {seed}")?;
        }
        if report.is_clamped() {
            writeln!(
                writer,
                "note: {} edges requested, clamped to {}",
                report.requested_edges,
                stats.edge_count()
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "node\tdegree")?;
        for (node, degree) in report.degrees.iter() {
            writeln!(writer, "{}\t{degree}", self.label(node))?;
        }

        writeln!(writer)?;
        let header: Vec<String> = (0..report.adjacency.size())
            .map(|node| self.label(node))
            .collect();
        writeln!(writer, "\t{}", header.join("\t"))?;
        for (node, row) in report.adjacency.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(writer, "{}\t{}", self.label(node), cells.join("\t"))?;
        }
        Ok(())
    }
}

/// Pretty-printed JSON renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &GraphReport, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}
