//! Colour refinement (1-dimensional Weisfeiler–Leman) with canonical colour ids.
//!
//! Colour ids are ranks of sorted signatures, so they depend only on the
//! structure of the graphs and never on node labels. Refining several graphs
//! jointly puts their colours in one id space, which makes colour histograms
//! directly comparable.

use std::collections::BTreeMap;

use crate::dense::DenseGraph;

type Signature = (usize, Vec<usize>);

/// Initial colouring by degree, in a shared id space.
pub(crate) fn degree_colours(graphs: &[&DenseGraph]) -> Vec<Vec<usize>> {
    graphs
        .iter()
        .map(|graph| (0..graph.len()).map(|node| graph.degree(node)).collect())
        .collect()
}

/// Refines `colours` until the number of distinct colours stops growing.
pub(crate) fn refine_joint(graphs: &[&DenseGraph], mut colours: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    colours = compress(colours);
    let mut distinct = count_distinct(&colours);
    loop {
        let signatures: Vec<Vec<Signature>> = graphs
            .iter()
            .zip(&colours)
            .map(|(graph, colouring)| {
                (0..graph.len())
                    .map(|node| {
                        let mut around: Vec<usize> = graph
                            .neighbours(node)
                            .iter()
                            .map(|&other| colouring[other])
                            .collect();
                        around.sort_unstable();
                        (colouring[node], around)
                    })
                    .collect()
            })
            .collect();
        let ids = rank(signatures.iter().flatten());
        let next: Vec<Vec<usize>> = signatures
            .iter()
            .map(|row| row.iter().map(|signature| ids[signature]).collect())
            .collect();
        let next_distinct = count_distinct(&next);
        colours = next;
        if next_distinct == distinct {
            return colours;
        }
        distinct = next_distinct;
    }
}

/// Refines a single graph starting from degree colours.
pub(crate) fn refine(graph: &DenseGraph) -> Vec<usize> {
    let graphs = [graph];
    let initial = degree_colours(&graphs);
    refine_joint(&graphs, initial)
        .pop()
        .unwrap_or_default()
}

/// Splits `node` off its colour class, placing it first within that class.
pub(crate) fn individualise(colours: &[usize], node: usize) -> Vec<usize> {
    let split: Vec<usize> = colours
        .iter()
        .enumerate()
        .map(|(idx, &colour)| colour * 2 + usize::from(idx != node))
        .collect();
    compress(vec![split]).pop().unwrap_or_default()
}

/// Individualises `node` and refines the result.
pub(crate) fn refine_individualised(graph: &DenseGraph, colours: &[usize], node: usize) -> Vec<usize> {
    refine_joint(&[graph], vec![individualise(colours, node)])
        .pop()
        .unwrap_or_default()
}

/// First cell with more than one node, if the colouring is not discrete.
pub(crate) fn target_cell(colours: &[usize]) -> Option<Vec<usize>> {
    cells(colours).into_iter().find(|cell| cell.len() > 1)
}

/// Nodes grouped by colour, cells in ascending colour order.
fn cells(colours: &[usize]) -> Vec<Vec<usize>> {
    let mut grouped: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (node, &colour) in colours.iter().enumerate() {
        grouped.entry(colour).or_default().push(node);
    }
    grouped.into_values().collect()
}

/// Sorted multiset of colours, used to compare graphs.
pub(crate) fn histogram(colours: &[usize]) -> Vec<usize> {
    let mut sorted = colours.to_vec();
    sorted.sort_unstable();
    sorted
}

fn compress(colours: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let ids = rank(colours.iter().flatten());
    colours
        .iter()
        .map(|row| row.iter().map(|colour| ids[colour]).collect())
        .collect()
}

fn rank<'a, T, I>(values: I) -> BTreeMap<&'a T, usize>
where
    T: Ord + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut ids: BTreeMap<&'a T, usize> = values.map(|value| (value, 0)).collect();
    for (idx, id) in ids.values_mut().enumerate() {
        *id = idx;
    }
    ids
}

fn count_distinct(colours: &[Vec<usize>]) -> usize {
    let mut all: Vec<usize> = colours.iter().flatten().copied().collect();
    all.sort_unstable();
    all.dedup();
    all.len()
}
