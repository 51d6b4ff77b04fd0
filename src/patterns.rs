//! The fixed reference graphs the classifier compares against.

use once_cell::sync::Lazy;

use crate::graph::Graph;

static REFERENCE_PATTERNS: Lazy<ReferencePatterns> = Lazy::new(ReferencePatterns::new);

/// Small constant graphs used only for isomorphism checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePatterns {
    /// The cycle on four vertices.
    pub c4: Graph,
    /// Two disjoint edges.
    pub two_k2: Graph,
    /// The path on five vertices.
    pub p5: Graph,
}

impl ReferencePatterns {
    pub fn new() -> Self {
        ReferencePatterns {
            c4: Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]),
            two_k2: Graph::from_edges(4, [(0, 1), (2, 3)]),
            p5: Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]),
        }
    }

    /// The process-wide table, built on first use.
    pub fn shared() -> &'static ReferencePatterns {
        &REFERENCE_PATTERNS
    }
}

impl Default for ReferencePatterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{is_regular, vertex_connectivity};

    #[test]
    fn patterns_have_expected_shape() {
        let patterns = ReferencePatterns::shared();
        assert_eq!((patterns.c4.vertex_count(), patterns.c4.edge_count()), (4, 4));
        assert_eq!((patterns.two_k2.vertex_count(), patterns.two_k2.edge_count()), (4, 2));
        assert_eq!((patterns.p5.vertex_count(), patterns.p5.edge_count()), (5, 4));
    }

    #[test]
    fn two_k2_is_regular_and_disconnected() {
        let two_k2 = &ReferencePatterns::shared().two_k2;
        assert!(is_regular(two_k2));
        assert_eq!(vertex_connectivity(two_k2), 0);
    }

    #[test]
    fn shared_table_is_built_once() {
        assert!(std::ptr::eq(ReferencePatterns::shared(), ReferencePatterns::shared()));
    }
}
