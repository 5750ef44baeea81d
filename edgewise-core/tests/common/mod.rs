use edgewise_core::{Coordinate, Edge, Layout, LayoutKind, LayoutProvider};

/// Places node `i` at `(i, degree(i))`, so tests can read the edge set back
/// out of the coordinates.
#[derive(Clone, Copy, Default)]
pub struct DegreeLine;

impl LayoutProvider for DegreeLine {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Random
    }

    fn layout(&self, node_count: usize, edges: &[Edge]) -> Layout {
        Layout::new(
            (0..node_count)
                .map(|node| {
                    let degree = edges.iter().filter(|edge| edge.touches(node)).count();
                    Coordinate::new(node as f64, degree as f64)
                })
                .collect(),
        )
    }
}

/// Provider that returns a fixed, possibly malformed, answer.
#[derive(Clone)]
pub struct Canned {
    pub kind: LayoutKind,
    pub positions: Vec<Coordinate>,
}

impl LayoutProvider for Canned {
    fn kind(&self) -> LayoutKind {
        self.kind
    }

    fn layout(&self, _node_count: usize, _edges: &[Edge]) -> Layout {
        Layout::new(self.positions.clone())
    }
}
