#![allow(dead_code)]

use degseq_graph::SimpleGraph;

pub fn graph(nodes: usize, pairs: &[(usize, usize)]) -> SimpleGraph {
    SimpleGraph::from_pairs(nodes, pairs).unwrap()
}

pub fn cycle(nodes: usize) -> SimpleGraph {
    let pairs: Vec<(usize, usize)> = (0..nodes).map(|idx| (idx, (idx + 1) % nodes)).collect();
    graph(nodes, &pairs)
}

pub fn complete(nodes: usize) -> SimpleGraph {
    let mut pairs = Vec::new();
    for a in 0..nodes {
        for b in a + 1..nodes {
            pairs.push((a, b));
        }
    }
    graph(nodes, &pairs)
}

pub fn two_triangles() -> SimpleGraph {
    graph(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)])
}

/// Builds a graph on `nodes` nodes from an upper-triangle bit mask.
pub fn from_mask(nodes: usize, mask: &[bool]) -> SimpleGraph {
    let mut pairs = Vec::new();
    let mut idx = 0;
    for a in 0..nodes {
        for b in a + 1..nodes {
            if mask[idx] {
                pairs.push((a, b));
            }
            idx += 1;
        }
    }
    graph(nodes, &pairs)
}

pub fn relabel(graph: &SimpleGraph, perm: &[usize]) -> SimpleGraph {
    SimpleGraph::from_configuration(perm.len(), &graph.configuration().relabel(perm)).unwrap()
}
