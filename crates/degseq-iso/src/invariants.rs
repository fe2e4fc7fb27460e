use degseq_core::{RealizeError, UndirectedGraph};
use serde::{Deserialize, Serialize};

use crate::dense::DenseGraph;

/// Cheap isomorphism invariants; differing values rule out isomorphism.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GraphInvariants {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Degrees in descending order.
    pub degrees: Vec<usize>,
    /// Number of triangles.
    pub triangles: usize,
    /// Connected component sizes in descending order.
    pub components: Vec<usize>,
}

/// Computes the invariants of `graph`.
pub fn graph_invariants(graph: &dyn UndirectedGraph) -> Result<GraphInvariants, RealizeError> {
    let dense = DenseGraph::from_graph(graph)?;
    let nodes = dense.len();

    let mut degrees: Vec<usize> = (0..nodes).map(|node| dense.degree(node)).collect();
    degrees.sort_unstable_by(|a, b| b.cmp(a));

    let mut triangles = 0usize;
    for a in 0..nodes {
        for &b in dense.neighbours(a).iter().filter(|&&b| b > a) {
            triangles += dense
                .neighbours(b)
                .iter()
                .filter(|&&c| c > b && dense.adjacent(a, c))
                .count();
        }
    }

    let mut seen = vec![false; nodes];
    let mut components = Vec::new();
    for start in 0..nodes {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut stack = vec![start];
        let mut size = 0usize;
        while let Some(node) = stack.pop() {
            size += 1;
            for &other in dense.neighbours(node) {
                if !seen[other] {
                    seen[other] = true;
                    stack.push(other);
                }
            }
        }
        components.push(size);
    }
    components.sort_unstable_by(|a, b| b.cmp(a));

    Ok(GraphInvariants {
        node_count: nodes,
        edge_count: dense.edge_count(),
        degrees,
        triangles,
        components,
    })
}
