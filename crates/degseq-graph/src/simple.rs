use std::collections::BTreeSet;

use degseq_core::{Configuration, DegreeSequence, Edge, ErrorInfo, RealizeError, UndirectedGraph};

/// Simple undirected graph on nodes `0..node_count`, isolated nodes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: Vec<BTreeSet<usize>>,
    edges: BTreeSet<Edge>,
}

impl SimpleGraph {
    /// Creates an edgeless graph with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); node_count],
            edges: BTreeSet::new(),
        }
    }

    /// Induces the graph of a configuration over `node_count` nodes.
    pub fn from_configuration(
        node_count: usize,
        config: &Configuration,
    ) -> Result<Self, RealizeError> {
        let mut graph = Self::new(node_count);
        for edge in config.edges() {
            graph.insert(*edge)?;
        }
        Ok(graph)
    }

    /// Induces the graph of raw node pairs over `node_count` nodes.
    pub fn from_pairs(node_count: usize, pairs: &[(usize, usize)]) -> Result<Self, RealizeError> {
        let mut graph = Self::new(node_count);
        for &(a, b) in pairs {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Adds the edge `{a, b}` while validating simplicity.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<Edge, RealizeError> {
        let edge = Edge::new(a, b)?;
        self.insert(edge)?;
        Ok(edge)
    }

    fn insert(&mut self, edge: Edge) -> Result<(), RealizeError> {
        let (u, v) = edge.endpoints();
        self.check_node(u)?;
        self.check_node(v)?;
        if !self.edges.insert(edge) {
            return Err(RealizeError::Graph(
                ErrorInfo::new("duplicate-edge", "edge already present in the graph")
                    .with_context("edge", edge.to_string()),
            ));
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        Ok(())
    }

    /// Removes an existing edge.
    pub fn remove_edge(&mut self, edge: Edge) -> Result<(), RealizeError> {
        if !self.edges.remove(&edge) {
            return Err(RealizeError::Graph(
                ErrorInfo::new("missing-edge", "edge is not part of the graph")
                    .with_context("edge", edge.to_string()),
            ));
        }
        let (u, v) = edge.endpoints();
        self.adjacency[u].remove(&v);
        self.adjacency[v].remove(&u);
        Ok(())
    }

    /// Returns whether `edge` is present.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Snapshot of the current edge set.
    pub fn configuration(&self) -> Configuration {
        Configuration::from(&self.edges)
    }

    /// Current edges as a vector in ascending order.
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges.iter().copied().collect()
    }

    /// Realized degree of every node.
    pub fn degree_sequence(&self) -> DegreeSequence {
        DegreeSequence::new(self.adjacency.iter().map(BTreeSet::len).collect())
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<(), RealizeError> {
        if node >= self.adjacency.len() {
            return Err(RealizeError::Graph(
                ErrorInfo::new("node-out-of-range", "node index exceeds the node count")
                    .with_context("node", node.to_string())
                    .with_context("nodes", self.adjacency.len().to_string()),
            ));
        }
        Ok(())
    }
}

impl UndirectedGraph for SimpleGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn degree(&self, node: usize) -> Result<usize, RealizeError> {
        self.check_node(node)?;
        Ok(self.adjacency[node].len())
    }

    fn neighbours(&self, node: usize) -> Result<Vec<usize>, RealizeError> {
        self.check_node(node)?;
        Ok(self.adjacency[node].iter().copied().collect())
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .map(|neighbours| neighbours.contains(&b))
            .unwrap_or(false)
    }
}
