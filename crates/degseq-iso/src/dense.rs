use degseq_core::{RealizeError, UndirectedGraph};

/// Adjacency matrix plus neighbour lists, built once per comparison.
#[derive(Debug, Clone)]
pub(crate) struct DenseGraph {
    adjacency: Vec<Vec<bool>>,
    neighbours: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DenseGraph {
    pub(crate) fn from_graph(graph: &dyn UndirectedGraph) -> Result<Self, RealizeError> {
        let nodes = graph.node_count();
        let mut adjacency = vec![vec![false; nodes]; nodes];
        let mut neighbours = Vec::with_capacity(nodes);
        for node in 0..nodes {
            let row = graph.neighbours(node)?;
            for &other in &row {
                adjacency[node][other] = true;
            }
            neighbours.push(row);
        }
        Ok(Self {
            adjacency,
            neighbours,
            edge_count: graph.edge_count(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency[a][b]
    }

    pub(crate) fn neighbours(&self, node: usize) -> &[usize] {
        &self.neighbours[node]
    }

    pub(crate) fn degree(&self, node: usize) -> usize {
        self.neighbours[node].len()
    }

    /// Whether `a` and `b` agree on every neighbour other than each other;
    /// swapping such a pair is an automorphism.
    pub(crate) fn interchangeable(&self, a: usize, b: usize) -> bool {
        (0..self.len()).all(|other| {
            other == a || other == b || self.adjacency[a][other] == self.adjacency[b][other]
        })
    }

    /// Edge list after mapping node `i` to `labels[i]`, sorted.
    pub(crate) fn relabelled_edges(&self, labels: &[usize]) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (node, row) in self.neighbours.iter().enumerate() {
            for &other in row {
                if node < other {
                    let (a, b) = (labels[node], labels[other]);
                    edges.push(if a < b { (a, b) } else { (b, a) });
                }
            }
        }
        edges.sort_unstable();
        edges
    }
}
