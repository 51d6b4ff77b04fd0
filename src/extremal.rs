//! Deletion of the minimum- and maximum-degree vertex sets.

use std::collections::BTreeSet;

use crate::{
    error::ClassifyError,
    graph::{Graph, Vertex},
    structure::min_max_degree,
};

/// Partitions out the vertices of degree `min_degree` and those of degree
/// `max_degree`.
///
/// The two sets are disjoint. Equal bounds would make them coincide, so they
/// are rejected with [`ClassifyError::RegularDegrees`].
pub fn extremal_vertex_sets(
    graph: &Graph,
    min_degree: usize,
    max_degree: usize,
) -> Result<(BTreeSet<Vertex>, BTreeSet<Vertex>), ClassifyError> {
    if min_degree == max_degree {
        return Err(ClassifyError::RegularDegrees { degree: min_degree });
    }

    let mut min_set = BTreeSet::new();
    let mut max_set = BTreeSet::new();
    for (v, degree) in graph.degrees() {
        if degree == min_degree {
            min_set.insert(v);
        } else if degree == max_degree {
            max_set.insert(v);
        }
    }
    Ok((min_set, max_set))
}

/// The two induced subgraphs left after removing every minimum-degree vertex
/// and, separately, every maximum-degree vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremalDeletion {
    pub min_degree: usize,
    pub max_degree: usize,
    /// `G` minus its minimum-degree vertices.
    pub low: Graph,
    /// `G` minus its maximum-degree vertices.
    pub high: Graph,
}

impl ExtremalDeletion {
    /// Fails on graphs without vertices and on regular graphs.
    pub fn new(graph: &Graph) -> Result<Self, ClassifyError> {
        let (min_degree, max_degree) = min_max_degree(graph)?;
        let (min_set, max_set) = extremal_vertex_sets(graph, min_degree, max_degree)?;

        Ok(ExtremalDeletion {
            min_degree,
            max_degree,
            low: graph.without_vertices(&min_set),
            high: graph.without_vertices(&max_set),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        Graph::from_edges(n, (1..n).map(|v| (v - 1, v)))
    }

    #[test]
    fn path_splits_into_endpoints_and_interior() {
        let (min_set, max_set) = extremal_vertex_sets(&path(5), 1, 2).unwrap();
        assert_eq!(min_set, BTreeSet::from([0, 4]));
        assert_eq!(max_set, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn middle_degrees_are_in_neither_set() {
        // Degrees: 0 -> 3, 1 -> 2, 2 -> 2, 3 -> 1, 4 -> 2.
        let graph = Graph::from_edges(5, [(0, 1), (0, 2), (0, 3), (1, 4), (2, 4)]);
        let (min_set, max_set) = extremal_vertex_sets(&graph, 1, 3).unwrap();
        assert_eq!(min_set, BTreeSet::from([3]));
        assert_eq!(max_set, BTreeSet::from([0]));
    }

    #[test]
    fn equal_bounds_are_rejected() {
        let cycle = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(
            extremal_vertex_sets(&cycle, 2, 2),
            Err(ClassifyError::RegularDegrees { degree: 2 })
        );
    }

    #[test]
    fn deletion_of_path_on_five_vertices() {
        let graph = path(5);
        let deletion = ExtremalDeletion::new(&graph).unwrap();

        assert_eq!((deletion.min_degree, deletion.max_degree), (1, 2));
        assert_eq!(deletion.low.vertex_count(), 3);
        assert_eq!(deletion.low.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
        assert_eq!(deletion.high.vertices().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(deletion.high.edge_count(), 0);
        assert_eq!(graph, path(5));
    }

    #[test]
    fn deletion_keeps_the_opposite_extreme() {
        let star = Graph::from_edges(3, [(0, 1), (0, 2)]);
        let deletion = ExtremalDeletion::new(&star).unwrap();
        assert_eq!(deletion.low.vertices().collect::<Vec<_>>(), vec![0]);
        assert_eq!(deletion.high.vertices().collect::<Vec<_>>(), vec![1, 2]);

        let k2_plus_isolated = Graph::from_edges(3, [(0, 1)]);
        let deletion = ExtremalDeletion::new(&k2_plus_isolated).unwrap();
        assert_eq!(deletion.low.edge_count(), 1);
        assert!(deletion.high.edges().next().is_none());
        assert_eq!(deletion.high.vertex_count(), 1);
    }

    #[test]
    fn deletion_rejects_regular_and_empty_graphs() {
        let cycle = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(
            ExtremalDeletion::new(&cycle),
            Err(ClassifyError::RegularDegrees { degree: 2 })
        );
        assert_eq!(ExtremalDeletion::new(&Graph::new()), Err(ClassifyError::EmptyGraph));
    }
}
