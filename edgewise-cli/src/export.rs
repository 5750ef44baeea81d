//! File exporters for generated graphs.

use std::io::{self, Write};

use edgewise_core::{AdjacencyMatrix, node_label};

/// Writes a view of a graph in some interchange format.
pub trait Exporter {
    /// Writes `matrix` to `writer`.
    ///
    /// # Errors
    /// Returns [`io::Error`] when writing fails.
    fn export(&self, matrix: &AdjacencyMatrix, writer: &mut dyn Write) -> io::Result<()>;
}

/// Exports the adjacency matrix as CSV.
///
/// The first row is a header with an empty leading cell followed by one
/// `V{i}` label per column; each following row starts with its own label.
/// A matrix without nodes leaves only the empty header cell, which `csv`
/// writes as `""`.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// use edgewise_cli::export::{CsvAdjacencyExporter, Exporter};
/// use edgewise_core::{Graph, adjacency_matrix};
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let matrix = adjacency_matrix(&Graph::from_edges(2, [(0, 1)])?);
/// let mut buffer = Vec::new();
/// CsvAdjacencyExporter.export(&matrix, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, ",V0,V1\nV0,0,1\nV1,1,0\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvAdjacencyExporter;

impl Exporter for CsvAdjacencyExporter {
    fn export(&self, matrix: &AdjacencyMatrix, writer: &mut dyn Write) -> io::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        let header = std::iter::once(String::new()).chain((0..matrix.size()).map(node_label));
        out.write_record(header)?;

        for (node, row) in matrix.rows().enumerate() {
            let record = std::iter::once(node_label(node)).chain(row.iter().map(u8::to_string));
            out.write_record(record)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgewise_core::{Graph, adjacency_matrix};
    use rstest::rstest;

    fn export_to_string(graph: &Graph) -> String {
        let mut buffer = Vec::new();
        CsvAdjacencyExporter
            .export(&adjacency_matrix(graph), &mut buffer)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buffer).expect("CSV output is ASCII")
    }

    #[rstest]
    fn single_node_has_one_zero_cell() {
        assert_eq!(export_to_string(&Graph::empty(1)), ",V0\nV0,0\n");
    }

    #[rstest]
    fn empty_graph_writes_a_quoted_empty_header() {
        assert_eq!(export_to_string(&Graph::empty(0)), "\"\"\n");
    }

    #[rstest]
    fn triangle_rows_are_labelled() {
        let text = export_to_string(&Graph::complete(3));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![",V0,V1,V2", "V0,0,1,1", "V1,1,0,1", "V2,1,1,0"]
        );
    }
}
