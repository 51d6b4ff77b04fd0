//! Structural predicates over a single graph.
//!
//! Everything here is pure and total, except `min_max_degree`, which has no
//! answer for a graph without vertices.

use crate::{
    error::ClassifyError,
    graph::{Graph, Vertex},
};

pub use connectivity::vertex_connectivity;
pub use isomorphism::is_isomorphic;

mod connectivity;
mod isomorphism;

/// Is every pair of distinct vertices adjacent?
///
/// Graphs with fewer than two vertices are trivially complete.
pub fn is_complete(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    graph.edge_count() == n * n.saturating_sub(1) / 2
}

/// Do all vertices share one degree? Vacuously true without vertices.
pub fn is_regular(graph: &Graph) -> bool {
    let mut degrees = graph.degrees().map(|(_, degree)| degree);
    match degrees.next() {
        Some(first) => degrees.all(|degree| degree == first),
        None => true,
    }
}

/// The smallest and largest vertex degree, found in a single scan.
pub fn min_max_degree(graph: &Graph) -> Result<(usize, usize), ClassifyError> {
    graph
        .degrees()
        .map(|(_, degree)| (degree, degree))
        .reduce(|(min, max), (lo, hi)| (min.min(lo), max.max(hi)))
        .ok_or(ClassifyError::EmptyGraph)
}

/// A dense adjacency matrix over the vertices of a graph, indexed `0..n` in
/// ascending label order.
pub(crate) struct Dense {
    labels: Vec<Vertex>,
    adjacent: Vec<Vec<bool>>,
}

impl Dense {
    pub(crate) fn new(graph: &Graph) -> Self {
        let labels: Vec<Vertex> = graph.vertices().collect();
        let n = labels.len();
        let mut adjacent = vec![vec![false; n]; n];

        // `labels` is sorted, so positions can be found by binary search.
        for (u, v) in graph.edges() {
            if let (Ok(i), Ok(j)) = (labels.binary_search(&u), labels.binary_search(&v)) {
                adjacent[i][j] = true;
                adjacent[j][i] = true;
            }
        }

        Dense { labels, adjacent }
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn label(&self, index: usize) -> Vertex {
        self.labels[index]
    }

    pub(crate) fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacent[i][j]
    }

    pub(crate) fn degree(&self, i: usize) -> usize {
        self.adjacent[i].iter().filter(|&&adjacent| adjacent).count()
    }
}
