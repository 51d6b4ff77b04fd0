//! Membership in the base classes `X` and `Y` of the dichotomy.
//!
//! `Y` holds graphs on at most four vertices other than `C4` and `2K2`,
//! graphs with at most one edge and complete graphs. `X` adds regular
//! graphs, graphs whose connectivity or complement connectivity is at least
//! three, and the five-vertex path together with its complement.

use crate::{
    graph::Graph,
    patterns::ReferencePatterns,
    structure::{is_complete, is_isomorphic, is_regular, vertex_connectivity},
};

/// Connectivity from which a graph (or its complement) belongs to `X`.
const CONNECTIVITY_THRESHOLD: usize = 3;

/// Decides class membership against a table of reference patterns.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'p> {
    patterns: &'p ReferencePatterns,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Classifier::new(ReferencePatterns::shared())
    }
}

impl<'p> Classifier<'p> {
    pub fn new(patterns: &'p ReferencePatterns) -> Self {
        Classifier { patterns }
    }

    pub fn patterns(&self) -> &'p ReferencePatterns {
        self.patterns
    }

    /// Is `graph` in `Y`?
    pub fn in_y(&self, graph: &Graph) -> bool {
        if graph.vertex_count() <= 4 {
            return !is_isomorphic(graph, &self.patterns.c4)
                && !is_isomorphic(graph, &self.patterns.two_k2);
        }
        graph.edge_count() <= 1 || is_complete(graph)
    }

    /// Is `graph` in `X ∪ Y`? `complement` must be the complement of `graph`.
    pub fn in_x_or_y(&self, graph: &Graph, complement: &Graph) -> bool {
        // Small graphs are in Y, except C4 and 2K2, which are in X.
        if graph.vertex_count() <= 4 {
            return true;
        }
        if graph.edge_count() <= 1 {
            return true;
        }
        if is_regular(graph) {
            return true;
        }
        if vertex_connectivity(graph) >= CONNECTIVITY_THRESHOLD
            || vertex_connectivity(complement) >= CONNECTIVITY_THRESHOLD
        {
            return true;
        }
        graph.vertex_count() == 5
            && (is_isomorphic(graph, &self.patterns.p5)
                || is_isomorphic(complement, &self.patterns.p5))
    }
}
