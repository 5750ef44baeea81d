//! Edgewise core library.
//!
//! Generates uniformly random undirected graphs and derives the views a
//! presentation layer needs: per-node degrees, the adjacency matrix and summary
//! statistics. Layout is delegated to a caller-supplied [`LayoutProvider`].
//!
//! ```
//! use edgewise_core::{adjacency_matrix, degrees, generate, summary};
//!
//! let graph = generate(6, 6, Some(42))?;
//! assert_eq!(graph.edge_count(), 6);
//! assert_eq!(degrees(&graph).total(), 12);
//! assert!(adjacency_matrix(&graph).is_symmetric());
//! assert_eq!(summary(&graph).average_degree(), 2.0);
//! # Ok::<(), edgewise_core::GraphError>(())
//! ```
//!
//! When the `metrics` feature is enabled generation emits:
//!
//! - `graph_generations` (counter)
//! - `graph_generated_edges` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod degree;
mod error;
mod generate;
mod graph;
mod layout;
mod request;
mod summary;
mod union_find;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::{AdjacencyMatrix, adjacency_matrix},
    degree::{DegreeTable, degrees, node_label},
    error::{GraphError, GraphErrorCode, Result},
    generate::{MAX_NODE_COUNT, generate, generate_with_rng, max_edges},
    graph::{Edge, Graph},
    layout::{Coordinate, Layout, LayoutKind, LayoutProvider},
    request::{DEFAULT_EDGE_COUNT, DEFAULT_NODE_COUNT, GraphRequest, ValidatedRequest},
    summary::{SummaryStats, summary},
};
