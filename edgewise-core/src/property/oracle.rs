//! Traversal oracle for connected components.

use std::collections::VecDeque;

use crate::Graph;

/// Counts components by repeatedly picking an unvisited node and flooding
/// everything reachable from it.
pub(super) fn traversal_component_count(graph: &Graph) -> usize {
    let mut neighbours = vec![Vec::new(); graph.node_count()];
    for edge in graph.edges() {
        neighbours[edge.source()].push(edge.target());
        neighbours[edge.target()].push(edge.source());
    }

    let mut visited = vec![false; graph.node_count()];
    let mut components = 0;
    for start in graph.nodes() {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in &neighbours[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    components
}
