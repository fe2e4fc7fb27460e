use degseq_core::{Configuration, Edge, ErrorInfo, RealizeError};
use rand::seq::SliceRandom;
use rand::Rng;

use degseq_core::rng::RngHandle;

use crate::simple::SimpleGraph;

/// Which pairing a double-edge switch produces from `{a,b}` and `{c,d}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOrientation {
    /// Produces `{a,d}` and `{c,b}`.
    Crossed,
    /// Produces `{a,c}` and `{b,d}`.
    Parallel,
}

impl SwitchOrientation {
    /// Both orientations, in a fixed order.
    pub const ALL: [SwitchOrientation; 2] = [SwitchOrientation::Crossed, SwitchOrientation::Parallel];
}

/// Result of performing a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    /// Edges taken out of the graph.
    pub removed: [Edge; 2],
    /// Edges put in their place.
    pub added: [Edge; 2],
}

/// Outcome of validating a switch without mutating the graph.
#[derive(Debug)]
pub enum SwitchDryRun {
    /// The switch would succeed and add the given edges.
    Valid {
        /// Edges the switch would add.
        added: [Edge; 2],
    },
    /// The switch would fail with the provided error.
    Invalid(RealizeError),
}

/// Replaces two edges by the other pairing of their endpoints.
///
/// Every node keeps its degree. The switch is rejected when the edges share
/// an endpoint or when a produced edge already exists.
pub fn switch_edges(
    graph: &mut SimpleGraph,
    first: Edge,
    second: Edge,
    orientation: SwitchOrientation,
) -> Result<SwitchOutcome, RealizeError> {
    let added = plan_switch(graph, first, second, orientation)?;
    graph.remove_edge(first)?;
    graph.remove_edge(second)?;
    for edge in added {
        graph.add_edge(edge.u(), edge.v())?;
    }
    Ok(SwitchOutcome {
        removed: [first, second],
        added,
    })
}

/// Dry-run validator for [`switch_edges`].
pub fn switch_edges_dry_run(
    graph: &SimpleGraph,
    first: Edge,
    second: Edge,
    orientation: SwitchOrientation,
) -> SwitchDryRun {
    match plan_switch(graph, first, second, orientation) {
        Ok(added) => SwitchDryRun::Valid { added },
        Err(err) => SwitchDryRun::Invalid(err),
    }
}

fn plan_switch(
    graph: &SimpleGraph,
    first: Edge,
    second: Edge,
    orientation: SwitchOrientation,
) -> Result<[Edge; 2], RealizeError> {
    for edge in [first, second] {
        if !graph.contains(&edge) {
            return Err(RealizeError::Graph(
                ErrorInfo::new("missing-edge", "edge is not part of the graph")
                    .with_context("edge", edge.to_string()),
            ));
        }
    }
    let (a, b) = first.endpoints();
    let (c, d) = second.endpoints();
    if a == c || a == d || b == c || b == d {
        return Err(RealizeError::Graph(
            ErrorInfo::new("shared-endpoint", "switched edges must have four distinct endpoints")
                .with_context("first", first.to_string())
                .with_context("second", second.to_string()),
        ));
    }
    let added = match orientation {
        SwitchOrientation::Crossed => [Edge::new(a, d)?, Edge::new(c, b)?],
        SwitchOrientation::Parallel => [Edge::new(a, c)?, Edge::new(b, d)?],
    };
    for edge in added {
        if graph.contains(&edge) {
            return Err(RealizeError::Graph(
                ErrorInfo::new("switch-would-duplicate", "switch would create a parallel edge")
                    .with_context("edge", edge.to_string()),
            ));
        }
    }
    Ok(added)
}

/// Configurations reachable from `graph` by exactly one valid switch.
pub fn switch_neighbours(graph: &SimpleGraph) -> Result<Vec<Configuration>, RealizeError> {
    let edges = graph.edge_list();
    let mut neighbours = Vec::new();
    for (idx, &first) in edges.iter().enumerate() {
        for &second in &edges[idx + 1..] {
            for orientation in SwitchOrientation::ALL {
                if let SwitchDryRun::Valid { .. } =
                    switch_edges_dry_run(graph, first, second, orientation)
                {
                    let mut trial = graph.clone();
                    switch_edges(&mut trial, first, second, orientation)?;
                    neighbours.push(trial.configuration());
                }
            }
        }
    }
    Ok(neighbours)
}

/// Attempts one uniformly chosen switch; returns `None` when the draw is rejected.
pub fn switch_random(
    graph: &mut SimpleGraph,
    rng: &mut RngHandle,
) -> Result<Option<SwitchOutcome>, RealizeError> {
    let edges = graph.edge_list();
    if edges.len() < 2 {
        return Ok(None);
    }
    let picked: Vec<Edge> = edges.choose_multiple(rng, 2).copied().collect();
    let orientation = if rng.gen_bool(0.5) {
        SwitchOrientation::Crossed
    } else {
        SwitchOrientation::Parallel
    };
    match switch_edges(graph, picked[0], picked[1], orientation) {
        Ok(outcome) => Ok(Some(outcome)),
        Err(err) if is_soft_error(&err) => Ok(None),
        Err(err) => Err(err),
    }
}

fn is_soft_error(error: &RealizeError) -> bool {
    matches!(
        error,
        RealizeError::Graph(info)
            if matches!(info.code.as_str(), "shared-endpoint" | "switch-would-duplicate")
    )
}
