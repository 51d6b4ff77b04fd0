//! A finite simple undirected graph.
//!
//! Vertices are opaque integer labels. Labels survive vertex deletion, so an
//! induced subgraph keeps referring to the vertices of its source graph.

use std::collections::{BTreeMap, BTreeSet};

pub type Vertex = usize;

/// A simple undirected graph: no self-loops, no parallel edges, no weights.
///
/// Adjacency is kept sorted, so vertex and edge enumeration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, BTreeSet<Vertex>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the edgeless graph on the vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        Graph {
            adjacency: (0..n).map(|v| (v, BTreeSet::new())).collect(),
            edge_count: 0,
        }
    }

    /// Creates a graph on the vertices `0..n` with the given edges.
    ///
    /// Endpoints outside `0..n` are added as extra vertices.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (Vertex, Vertex)>) -> Self {
        let mut graph = Self::with_vertices(n);
        for (u, v) in edges {
            graph.insert_edge(u, v);
        }
        graph
    }

    pub fn insert_vertex(&mut self, v: Vertex) {
        self.adjacency.entry(v).or_default();
    }

    /// Inserts the edge `{u, v}`, adding missing endpoints.
    ///
    /// Returns `false` and leaves the graph unchanged for self-loops and for
    /// edges that are already present.
    pub fn insert_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        if u == v {
            return false;
        }
        self.insert_vertex(u);
        self.insert_vertex(v);

        let inserted = self.adjacency.entry(u).or_default().insert(v);
        if inserted {
            self.adjacency.entry(v).or_default().insert(u);
            self.edge_count += 1;
        }
        inserted
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.adjacency
            .get(&u)
            .map_or(false, |neighbors| neighbors.contains(&v))
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each edge once as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbors)| {
            neighbors.range(u + 1..).map(move |&v| (u, v))
        })
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.adjacency.get(&v).map_or(0, BTreeSet::len)
    }

    /// The degree map: every vertex paired with its degree.
    pub fn degrees(&self) -> impl Iterator<Item = (Vertex, usize)> + '_ {
        self.adjacency
            .iter()
            .map(|(&v, neighbors)| (v, neighbors.len()))
    }

    /// The graph on the same vertex set whose edges are the non-edges of `self`.
    pub fn complement(&self) -> Graph {
        let mut complement = Graph::new();
        for (&u, neighbors) in &self.adjacency {
            let others: BTreeSet<Vertex> = self
                .vertices()
                .filter(|&v| v != u && !neighbors.contains(&v))
                .collect();
            complement.edge_count += others.len();
            complement.adjacency.insert(u, others);
        }
        complement.edge_count /= 2;
        complement
    }

    /// The subgraph induced by every vertex not in `removed`.
    ///
    /// The result is an independent copy; `self` is left untouched.
    pub fn without_vertices(&self, removed: &BTreeSet<Vertex>) -> Graph {
        let mut induced = Graph::new();
        for (&u, neighbors) in &self.adjacency {
            if removed.contains(&u) {
                continue;
            }
            let kept: BTreeSet<Vertex> = neighbors
                .iter()
                .copied()
                .filter(|v| !removed.contains(v))
                .collect();
            induced.edge_count += kept.len();
            induced.adjacency.insert(u, kept);
        }
        induced.edge_count /= 2;
        induced
    }
}
