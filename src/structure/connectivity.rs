//! Vertex connectivity by unit-capacity max flow.
//!
//! Every vertex `v` is split into an entry node `2v` and an exit node `2v + 1`
//! joined by an arc of capacity one, so a flow between two non-adjacent
//! vertices counts internally vertex-disjoint paths (Menger).

use std::collections::VecDeque;

use super::{is_complete, Dense};
use crate::graph::Graph;

/// The minimum number of vertices whose removal disconnects the graph or
/// leaves a single vertex.
///
/// The complete graph on `n` vertices has connectivity `n - 1`; a
/// disconnected graph has connectivity `0`, as does the graph without
/// vertices.
pub fn vertex_connectivity(graph: &Graph) -> usize {
    let n = graph.vertex_count();
    if is_complete(graph) {
        return n.saturating_sub(1);
    }

    let dense = Dense::new(graph);
    let network = SplitNetwork::new(&dense);

    // Connectivity never exceeds the minimum degree.
    let mut best = (0..n).map(|v| dense.degree(v)).min().unwrap_or(0);
    for s in 0..n {
        for t in s + 1..n {
            if best == 0 {
                return 0;
            }
            if !dense.is_adjacent(s, t) {
                best = best.min(network.disjoint_paths(s, t, best));
            }
        }
    }
    best
}

struct SplitNetwork {
    capacity: Vec<Vec<usize>>,
}

impl SplitNetwork {
    fn new(dense: &Dense) -> Self {
        let n = dense.len();
        let mut capacity = vec![vec![0; 2 * n]; 2 * n];

        for v in 0..n {
            capacity[entry(v)][exit(v)] = 1;
        }
        for u in 0..n {
            for v in 0..n {
                if dense.is_adjacent(u, v) {
                    capacity[exit(u)][entry(v)] = n;
                }
            }
        }

        SplitNetwork { capacity }
    }

    /// Counts internally vertex-disjoint `s`–`t` paths, stopping at `limit`.
    fn disjoint_paths(&self, s: usize, t: usize, limit: usize) -> usize {
        let mut residual = self.capacity.clone();
        let source = exit(s);
        let sink = entry(t);
        let mut flow = 0;

        while flow < limit {
            let Some(parent) = augmenting_path(&residual, source, sink) else {
                break;
            };

            let mut node = sink;
            while node != source {
                let prev = parent[node];
                residual[prev][node] -= 1;
                residual[node][prev] += 1;
                node = prev;
            }
            flow += 1;
        }
        flow
    }
}

fn entry(v: usize) -> usize {
    2 * v
}

fn exit(v: usize) -> usize {
    2 * v + 1
}

/// Breadth-first search in the residual network. Returns the parent of every
/// reached node if the sink is reachable.
fn augmenting_path(residual: &[Vec<usize>], source: usize, sink: usize) -> Option<Vec<usize>> {
    let nodes = residual.len();
    let mut parent = vec![usize::MAX; nodes];
    parent[source] = source;

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        for next in 0..nodes {
            if parent[next] == usize::MAX && residual[node][next] > 0 {
                parent[next] = node;
                if next == sink {
                    return Some(parent);
                }
                queue.push_back(next);
            }
        }
    }
    None
}
