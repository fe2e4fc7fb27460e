use degseq_core::rng::RngHandle;
use degseq_core::{DegreeSequence, ErrorInfo, RealizeError};
use tracing::debug;

use crate::rewire::switch_random;
use crate::simple::SimpleGraph;

/// Builds one labelled realization with the Havel–Hakimi construction.
///
/// At every step the node with the largest residual degree (lowest index on
/// ties) is joined to the nodes with the next largest residual degrees.
/// Fails with `not-graphical` when the residuals cannot be satisfied.
pub fn havel_hakimi(sequence: &DegreeSequence) -> Result<SimpleGraph, RealizeError> {
    let node_count = sequence.len();
    let mut graph = SimpleGraph::new(node_count);
    if sequence.edge_count().is_none() {
        return Err(RealizeError::Graph(not_graphical(sequence, "degree sum is odd")));
    }
    let mut residual: Vec<usize> = sequence.as_slice().to_vec();

    loop {
        let mut order: Vec<usize> = (0..node_count).filter(|&node| residual[node] > 0).collect();
        order.sort_by(|&a, &b| residual[b].cmp(&residual[a]).then(a.cmp(&b)));
        let Some((&hub, rest)) = order.split_first() else {
            break;
        };
        let needed = residual[hub];
        if needed > rest.len() {
            return Err(RealizeError::Graph(
                not_graphical(sequence, "not enough partners left")
                    .with_context("node", hub.to_string())
                    .with_context("needed", needed.to_string())
                    .with_context("available", rest.len().to_string()),
            ));
        }
        for &partner in &rest[..needed] {
            graph.add_edge(hub, partner)?;
            residual[partner] -= 1;
        }
        residual[hub] = 0;
    }

    Ok(graph)
}

/// Draws a labelled realization: Havel–Hakimi followed by `switches` random
/// switch attempts.
pub fn random_realization(
    sequence: &DegreeSequence,
    switches: usize,
    rng: &mut RngHandle,
) -> Result<SimpleGraph, RealizeError> {
    let mut graph = havel_hakimi(sequence)?;
    let mut accepted = 0usize;
    for _ in 0..switches {
        if switch_random(&mut graph, rng)?.is_some() {
            accepted += 1;
        }
    }
    debug!(attempts = switches, accepted, "random switch walk finished");
    Ok(graph)
}

fn not_graphical(sequence: &DegreeSequence, reason: &str) -> ErrorInfo {
    ErrorInfo::new("not-graphical", "degree sequence has no simple realization")
        .with_context("sequence", sequence.to_string())
        .with_context("reason", reason)
}
