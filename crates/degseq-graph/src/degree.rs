use degseq_core::{DegreeSequence, Edge};

/// Counts the edges touching each node, or `None` if an edge leaves `0..node_count`.
pub fn realized_degrees(node_count: usize, edges: &[Edge]) -> Option<Vec<usize>> {
    let mut degrees = vec![0usize; node_count];
    for edge in edges {
        let (u, v) = edge.endpoints();
        if v >= node_count {
            return None;
        }
        degrees[u] += 1;
        degrees[v] += 1;
    }
    Some(degrees)
}

/// Degree filter: accepts `edges` only if every node's realized degree equals
/// the required one, position for position.
pub fn check_degree_constraints(edges: &[Edge], sequence: &DegreeSequence) -> bool {
    let required = sequence.as_slice();
    let mut degrees = vec![0usize; required.len()];
    for edge in edges {
        let (u, v) = edge.endpoints();
        if v >= required.len() {
            return false;
        }
        degrees[u] += 1;
        degrees[v] += 1;
        if degrees[u] > required[u] || degrees[v] > required[v] {
            return false;
        }
    }
    degrees == required
}
