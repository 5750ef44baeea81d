//! Seam between the graph model and whatever positions nodes for drawing.
//!
//! Layout algorithms live outside this crate. A [`LayoutProvider`] receives
//! the node count and edge list and hands back one [`Coordinate`] per node;
//! [`crate::Graph::layout_with`] checks the answer before passing it on.

use std::fmt;

use crate::{Result, error::GraphError, graph::Edge};

/// Family of layout algorithm a provider implements.
///
/// # Examples
/// ```
/// use edgewise_core::LayoutKind;
///
/// assert_eq!(LayoutKind::Spring.to_string(), "spring");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutKind {
    /// Force-directed placement.
    #[default]
    Spring,
    /// Nodes evenly spaced on a circle.
    Circular,
    /// Nodes on concentric circles.
    Shell,
    /// Uniformly random positions in the unit square.
    Random,
}

impl LayoutKind {
    /// Returns the lowercase name of the layout family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Circular => "circular",
            Self::Shell => "shell",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a node in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reports whether both components are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Coordinates indexed by node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout {
    positions: Vec<Coordinate>,
}

impl Layout {
    /// Wraps per-node coordinates; `positions[i]` belongs to node `i`.
    #[must_use]
    pub const fn new(positions: Vec<Coordinate>) -> Self {
        Self { positions }
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Reports whether no node was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the coordinate for `node`.
    #[must_use]
    pub fn get(&self, node: usize) -> Option<Coordinate> {
        self.positions.get(node).copied()
    }

    /// Iterates `(node, coordinate)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Coordinate)> + '_ {
        self.positions.iter().copied().enumerate()
    }

    pub(crate) fn validate(&self, kind: LayoutKind, node_count: usize) -> Result<()> {
        if self.positions.len() != node_count {
            return Err(GraphError::LayoutIncomplete {
                kind,
                expected: node_count,
                got: self.positions.len(),
            });
        }
        match self.iter().find(|(_, position)| !position.is_finite()) {
            Some((node, _)) => Err(GraphError::NonFiniteCoordinate { kind, node }),
            None => Ok(()),
        }
    }
}

/// Positions the nodes of a graph.
///
/// # Examples
/// ```
/// use edgewise_core::{Coordinate, Edge, Graph, Layout, LayoutKind, LayoutProvider};
///
/// struct Line;
///
/// impl LayoutProvider for Line {
///     fn kind(&self) -> LayoutKind { LayoutKind::Random }
///     fn layout(&self, node_count: usize, _edges: &[Edge]) -> Layout {
///         Layout::new((0..node_count).map(|i| Coordinate::new(i as f64, 0.0)).collect())
///     }
/// }
///
/// let graph = Graph::complete(3);
/// let layout = graph.layout_with(&Line)?;
/// assert_eq!(layout.get(2), Some(Coordinate::new(2.0, 0.0)));
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
pub trait LayoutProvider {
    /// Reports which layout family this provider implements.
    fn kind(&self) -> LayoutKind;

    /// Computes one coordinate per node for the given edge set.
    fn layout(&self, node_count: usize, edges: &[Edge]) -> Layout;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LayoutKind::Spring, "spring")]
    #[case(LayoutKind::Circular, "circular")]
    #[case(LayoutKind::Shell, "shell")]
    #[case(LayoutKind::Random, "random")]
    fn layout_kind_names_are_lowercase(#[case] kind: LayoutKind, #[case] expected: &str) {
        assert_eq!(kind.as_str(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    fn validate_rejects_short_layouts() {
        let layout = Layout::new(vec![Coordinate::default(); 2]);
        assert_eq!(
            layout.validate(LayoutKind::Shell, 3),
            Err(GraphError::LayoutIncomplete {
                kind: LayoutKind::Shell,
                expected: 3,
                got: 2,
            })
        );
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn validate_rejects_non_finite_coordinates(#[case] x: f64, #[case] y: f64) {
        let layout = Layout::new(vec![Coordinate::default(), Coordinate::new(x, y)]);
        assert_eq!(
            layout.validate(LayoutKind::Circular, 2),
            Err(GraphError::NonFiniteCoordinate {
                kind: LayoutKind::Circular,
                node: 1,
            })
        );
    }

    #[rstest]
    fn validate_accepts_complete_layouts() {
        let layout = Layout::new(vec![Coordinate::new(0.5, -0.5); 4]);
        assert_eq!(layout.validate(LayoutKind::Random, 4), Ok(()));
    }
}
