use std::ops::ControlFlow;

use crate::dense::DenseGraph;

/// Backtracking search for colour-preserving isomorphisms from `a` onto `b`.
///
/// A complete mapping is only reported when every pair of mapped nodes agrees
/// on adjacency, so with equal edge counts it is an isomorphism.
pub(crate) struct Matcher<'a> {
    a: &'a DenseGraph,
    b: &'a DenseGraph,
    colours_a: &'a [usize],
    colours_b: &'a [usize],
    order: Vec<usize>,
    mapping: Vec<usize>,
    used: Vec<bool>,
}

const UNMAPPED: usize = usize::MAX;

impl<'a> Matcher<'a> {
    pub(crate) fn new(
        a: &'a DenseGraph,
        b: &'a DenseGraph,
        colours_a: &'a [usize],
        colours_b: &'a [usize],
    ) -> Self {
        Self {
            a,
            b,
            colours_a,
            colours_b,
            order: search_order(a, colours_a),
            mapping: vec![UNMAPPED; a.len()],
            used: vec![false; b.len()],
        }
    }

    /// Visits complete mappings until `visit` breaks; returns whether it broke.
    pub(crate) fn run<F>(&mut self, visit: &mut F) -> bool
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        if self.a.len() != self.b.len() || self.a.edge_count() != self.b.edge_count() {
            return false;
        }
        self.extend(0, visit).is_break()
    }

    fn extend<F>(&mut self, depth: usize, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        if depth == self.order.len() {
            return visit(&self.mapping);
        }
        let node = self.order[depth];
        for target in 0..self.b.len() {
            if self.used[target] || !self.consistent(node, target, depth) {
                continue;
            }
            self.mapping[node] = target;
            self.used[target] = true;
            let flow = self.extend(depth + 1, visit);
            self.used[target] = false;
            self.mapping[node] = UNMAPPED;
            flow?;
        }
        ControlFlow::Continue(())
    }

    fn consistent(&self, node: usize, target: usize, depth: usize) -> bool {
        if self.colours_a[node] != self.colours_b[target] {
            return false;
        }
        self.order[..depth].iter().all(|&mapped| {
            self.a.adjacent(node, mapped) == self.b.adjacent(target, self.mapping[mapped])
        })
    }
}

/// Rarest colours first, then nodes with the most already ordered neighbours.
fn search_order(graph: &DenseGraph, colours: &[usize]) -> Vec<usize> {
    let nodes = graph.len();
    let mut class_size = vec![0usize; nodes.max(1)];
    for &colour in colours {
        if colour >= class_size.len() {
            class_size.resize(colour + 1, 0);
        }
        class_size[colour] += 1;
    }
    let mut placed = vec![false; nodes];
    let mut links = vec![0usize; nodes];
    let mut order = Vec::with_capacity(nodes);
    for _ in 0..nodes {
        let next = (0..nodes)
            .filter(|&node| !placed[node])
            .min_by_key(|&node| {
                (
                    std::cmp::Reverse(links[node]),
                    class_size[colours[node]],
                    std::cmp::Reverse(graph.degree(node)),
                    node,
                )
            });
        let Some(next) = next else { break };
        placed[next] = true;
        order.push(next);
        for &other in graph.neighbours(next) {
            links[other] += 1;
        }
    }
    order
}
