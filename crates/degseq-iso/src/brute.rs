use degseq_core::{ErrorInfo, IsomorphismOracle, RealizeError, UndirectedGraph};
use itertools::Itertools;

use crate::dense::DenseGraph;

/// Largest node count the permutation oracle accepts.
pub const PERMUTATION_NODE_LIMIT: usize = 10;

/// Reference oracle that tries every relabelling of the first graph.
///
/// Runs in factorial time; intended for cross-checking small cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermutationOracle;

impl PermutationOracle {
    /// Creates the oracle.
    pub fn new() -> Self {
        Self
    }
}

impl IsomorphismOracle for PermutationOracle {
    fn name(&self) -> &'static str {
        "permutation"
    }

    fn are_isomorphic(
        &self,
        a: &dyn UndirectedGraph,
        b: &dyn UndirectedGraph,
    ) -> Result<bool, RealizeError> {
        let nodes = a.node_count();
        if nodes != b.node_count() || a.edge_count() != b.edge_count() {
            return Ok(false);
        }
        if nodes > PERMUTATION_NODE_LIMIT {
            return Err(RealizeError::Isomorphism(
                ErrorInfo::new("too-many-nodes", "permutation oracle is limited to small graphs")
                    .with_context("nodes", nodes.to_string())
                    .with_context("limit", PERMUTATION_NODE_LIMIT.to_string())
                    .with_hint("use the backtrack oracle"),
            ));
        }
        let dense_a = DenseGraph::from_graph(a)?;
        let dense_b = DenseGraph::from_graph(b)?;
        let identity: Vec<usize> = (0..nodes).collect();
        let target = dense_b.relabelled_edges(&identity);
        Ok((0..nodes)
            .permutations(nodes)
            .any(|perm| dense_a.relabelled_edges(&perm) == target))
    }
}
