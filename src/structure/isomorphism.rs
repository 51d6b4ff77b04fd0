//! Isomorphism testing for small graphs.
//!
//! The graphs compared here are tiny fixed patterns, so a backtracking search
//! over vertex bijections is enough once the cheap invariants agree.

use super::Dense;
use crate::graph::{Graph, Vertex};

/// Are `g` and `h` the same graph up to relabelling of vertices?
pub fn is_isomorphic(g: &Graph, h: &Graph) -> bool {
    find_isomorphism(g, h).is_some()
}

/// Finds a bijection from the vertices of `g` to those of `h` that preserves
/// adjacency, as pairs `(vertex of g, vertex of h)`.
pub(crate) fn find_isomorphism(g: &Graph, h: &Graph) -> Option<Vec<(Vertex, Vertex)>> {
    if !invariants_match(g, h) {
        return None;
    }

    let g = Dense::new(g);
    let h = Dense::new(h);
    let mut search = Search {
        g: &g,
        h: &h,
        image: Vec::with_capacity(g.len()),
        used: vec![false; h.len()],
    };

    if !search.extend() {
        return None;
    }
    Some(
        search
            .image
            .iter()
            .enumerate()
            .map(|(i, &j)| (g.label(i), h.label(j)))
            .collect(),
    )
}

/// Cheap necessary conditions: vertex count, edge count and degree sequence.
fn invariants_match(g: &Graph, h: &Graph) -> bool {
    if g.vertex_count() != h.vertex_count() || g.edge_count() != h.edge_count() {
        return false;
    }
    degree_sequence(g) == degree_sequence(h)
}

fn degree_sequence(graph: &Graph) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph.degrees().map(|(_, degree)| degree).collect();
    degrees.sort_unstable();
    degrees
}

struct Search<'a> {
    g: &'a Dense,
    h: &'a Dense,
    /// `image[i]` is the vertex of `h` assigned to vertex `i` of `g`.
    image: Vec<usize>,
    used: Vec<bool>,
}

impl Search<'_> {
    fn extend(&mut self) -> bool {
        let i = self.image.len();
        if i == self.g.len() {
            return true;
        }

        for j in 0..self.h.len() {
            if self.used[j] || !self.consistent(i, j) {
                continue;
            }
            self.image.push(j);
            self.used[j] = true;
            if self.extend() {
                return true;
            }
            self.used[j] = false;
            self.image.pop();
        }
        false
    }

    /// Can vertex `i` of `g` map to vertex `j` of `h` given the assignments
    /// made so far?
    fn consistent(&self, i: usize, j: usize) -> bool {
        self.g.degree(i) == self.h.degree(j)
            && self
                .image
                .iter()
                .enumerate()
                .all(|(k, &l)| self.g.is_adjacent(i, k) == self.h.is_adjacent(j, l))
    }
}
