use std::ops::ControlFlow;

use degseq_core::{IsomorphismOracle, RealizeError, UndirectedGraph};
use tracing::trace;

use crate::dense::DenseGraph;
use crate::refine::{degree_colours, histogram, refine_joint};
use crate::search::Matcher;

/// Exact oracle: cheap invariants, joint colour refinement, then a
/// colour-preserving backtracking search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackOracle;

impl BacktrackOracle {
    /// Creates the oracle.
    pub fn new() -> Self {
        Self
    }
}

impl IsomorphismOracle for BacktrackOracle {
    fn name(&self) -> &'static str {
        "backtrack"
    }

    fn are_isomorphic(
        &self,
        a: &dyn UndirectedGraph,
        b: &dyn UndirectedGraph,
    ) -> Result<bool, RealizeError> {
        if a.node_count() != b.node_count() || a.edge_count() != b.edge_count() {
            return Ok(false);
        }
        let mut degrees_a = a.degrees()?;
        let mut degrees_b = b.degrees()?;
        degrees_a.sort_unstable();
        degrees_b.sort_unstable();
        if degrees_a != degrees_b {
            return Ok(false);
        }

        let dense_a = DenseGraph::from_graph(a)?;
        let dense_b = DenseGraph::from_graph(b)?;
        let graphs = [&dense_a, &dense_b];
        let colours = refine_joint(&graphs, degree_colours(&graphs));
        if histogram(&colours[0]) != histogram(&colours[1]) {
            trace!(nodes = a.node_count(), "colour refinement separates graphs");
            return Ok(false);
        }

        let mut matcher = Matcher::new(&dense_a, &dense_b, &colours[0], &colours[1]);
        Ok(matcher.run(&mut |_: &[usize]| ControlFlow::Break(())))
    }
}
