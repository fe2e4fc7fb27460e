use std::ops::ControlFlow;

use degseq_core::{RealizeError, UndirectedGraph};
use serde::{Deserialize, Serialize};

use crate::dense::DenseGraph;
use crate::orbits::Orbits;
use crate::refine::{histogram, individualise, refine, refine_individualised, refine_joint, target_cell};
use crate::search::Matcher;

/// Default cap on the reported group order. Orders that fit in a `u64` are
/// reported exactly.
pub const DEFAULT_AUTOMORPHISM_LIMIT: u64 = u64::MAX;

/// Automorphism statistics for a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomorphismReport {
    /// Order of the automorphism group, or the cap when truncated.
    pub order: u64,
    /// Whether the order exceeded the cap.
    pub truncated: bool,
    /// Sorted sizes of the node orbits.
    pub orbit_hist: Vec<u32>,
}

impl Default for AutomorphismReport {
    fn default() -> Self {
        Self {
            order: 1,
            truncated: false,
            orbit_hist: Vec::new(),
        }
    }
}

/// Group order and node orbits of `graph`; orders above `limit` are
/// reported as `limit` with `truncated` set.
pub fn analyse_graph(
    graph: &dyn UndirectedGraph,
    limit: u64,
) -> Result<AutomorphismReport, RealizeError> {
    analyse_graph_with(graph, limit, &|| Ok(()))
}

/// [`analyse_graph`] that calls `interrupt` before every orbit test and
/// stops with the first error it returns.
///
/// The order is the product, along the first path of the
/// individualisation-refinement tree, of the orbit size of each
/// individualised node within its cell under the stabiliser of the nodes
/// fixed above it. Levels are processed bottom-up so the automorphisms found
/// so far always fix the current prefix.
pub fn analyse_graph_with(
    graph: &dyn UndirectedGraph,
    limit: u64,
    interrupt: &dyn Fn() -> Result<(), RealizeError>,
) -> Result<AutomorphismReport, RealizeError> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Ok(AutomorphismReport::default());
    }
    let dense = DenseGraph::from_graph(graph)?;

    let mut levels: Vec<(Vec<usize>, Vec<usize>)> = Vec::new();
    let mut current = refine(&dense);
    while let Some(cell) = target_cell(&current) {
        let next = refine_individualised(&dense, &current, cell[0]);
        levels.push((current, cell));
        current = next;
    }

    let mut orbits = Orbits::new(node_count);
    let mut order = 1u128;
    for (colours, cell) in levels.iter().rev() {
        let chosen = cell[0];
        let mut orbit_size = 1u128;
        for &other in &cell[1..] {
            interrupt()?;
            if !orbits.same(chosen, other) {
                let Some(perm) = mapping_onto(&dense, colours, chosen, other) else {
                    continue;
                };
                orbits.absorb(&perm);
            }
            orbit_size += 1;
        }
        order = order.saturating_mul(orbit_size);
    }

    let (order, truncated) = match u64::try_from(order) {
        Ok(order) if order <= limit => (order, false),
        _ => (limit, true),
    };
    Ok(AutomorphismReport {
        order,
        truncated,
        orbit_hist: orbits.sizes(),
    })
}

/// An automorphism fixing the singletons of `colours` and taking `from` to
/// `to`, if one exists.
fn mapping_onto(graph: &DenseGraph, colours: &[usize], from: usize, to: usize) -> Option<Vec<usize>> {
    if graph.interchangeable(from, to) {
        let mut perm: Vec<usize> = (0..graph.len()).collect();
        perm.swap(from, to);
        return Some(perm);
    }
    let graphs = [graph, graph];
    let split = vec![individualise(colours, from), individualise(colours, to)];
    let refined = refine_joint(&graphs, split);
    if histogram(&refined[0]) != histogram(&refined[1]) {
        return None;
    }
    let mut found = None;
    Matcher::new(graph, graph, &refined[0], &refined[1]).run(&mut |perm: &[usize]| {
        found = Some(perm.to_vec());
        ControlFlow::Break(())
    });
    found
}
