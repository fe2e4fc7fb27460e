use degseq_core::{RealizeError, UndirectedGraph};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::dense::DenseGraph;
use crate::orbits::Orbits;
use crate::refine::{refine, refine_individualised, target_cell};

/// Label-independent representative of an isomorphism class.
///
/// Two graphs are isomorphic exactly when their canonical forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalForm {
    /// Number of nodes.
    pub node_count: usize,
    /// Edges after canonical relabelling, sorted.
    pub edges: Vec<(usize, usize)>,
}

/// Computes the canonical form by individualisation and refinement.
///
/// Every branch of the search tree ends in a discrete colouring, which is
/// used as a relabelling; the smallest relabelled edge list wins.
pub fn canonical_form(graph: &dyn UndirectedGraph) -> Result<CanonicalForm, RealizeError> {
    canonical_form_with(graph, &|| Ok(()))
}

/// [`canonical_form`] that calls `interrupt` at every node of the search
/// tree and stops with the first error it returns.
pub fn canonical_form_with(
    graph: &dyn UndirectedGraph,
    interrupt: &dyn Fn() -> Result<(), RealizeError>,
) -> Result<CanonicalForm, RealizeError> {
    let dense = DenseGraph::from_graph(graph)?;
    let mut search = LabellingSearch {
        graph: &dense,
        interrupt,
        path: Vec::new(),
        first: None,
        best: None,
        automorphisms: Vec::new(),
    };
    search.descend(refine(&dense))?;
    Ok(CanonicalForm {
        node_count: dense.len(),
        edges: search.best.map(|leaf| leaf.edges).unwrap_or_default(),
    })
}

/// Hex SHA-256 of the canonical form; equal exactly for isomorphic graphs
/// barring hash collisions.
pub fn canonical_hash(graph: &dyn UndirectedGraph) -> Result<String, RealizeError> {
    Ok(canonical_form(graph)?.hash())
}

impl CanonicalForm {
    /// Hex SHA-256 digest of the node count and edge list.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.node_count as u64).to_le_bytes());
        for &(u, v) in &self.edges {
            hasher.update((u as u64).to_le_bytes());
            hasher.update((v as u64).to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Clone)]
struct Leaf {
    labels: Vec<usize>,
    edges: Vec<(usize, usize)>,
}

/// Depth-first walk of the individualisation-refinement tree.
///
/// Two children of a tree node lead to the same set of relabelled graphs
/// when an automorphism fixing the current path maps one onto the other.
/// Only the first child of each such class is expanded. Automorphisms come
/// from interchangeable node pairs and from leaves that relabel to the same
/// edge list as the first or best leaf.
struct LabellingSearch<'g, 'i> {
    graph: &'g DenseGraph,
    interrupt: &'i dyn Fn() -> Result<(), RealizeError>,
    path: Vec<usize>,
    first: Option<Leaf>,
    best: Option<Leaf>,
    automorphisms: Vec<Vec<usize>>,
}

impl LabellingSearch<'_, '_> {
    fn descend(&mut self, colours: Vec<usize>) -> Result<(), RealizeError> {
        (self.interrupt)()?;
        let Some(target) = target_cell(&colours) else {
            self.visit_leaf(colours);
            return Ok(());
        };
        let mut expanded: Vec<usize> = Vec::new();
        for node in target {
            if self.covered(&expanded, node) {
                continue;
            }
            let refined = refine_individualised(self.graph, &colours, node);
            self.path.push(node);
            self.descend(refined)?;
            self.path.pop();
            expanded.push(node);
        }
        Ok(())
    }

    fn covered(&self, expanded: &[usize], node: usize) -> bool {
        if expanded.is_empty() {
            return false;
        }
        if expanded
            .iter()
            .any(|&done| self.graph.interchangeable(done, node))
        {
            return true;
        }
        let mut orbits = Orbits::new(self.graph.len());
        for perm in &self.automorphisms {
            if self.path.iter().all(|&fixed| perm[fixed] == fixed) {
                orbits.absorb(perm);
            }
        }
        expanded.iter().any(|&done| orbits.same(done, node))
    }

    fn visit_leaf(&mut self, labels: Vec<usize>) {
        let edges = self.graph.relabelled_edges(&labels);
        let automorphism = [&self.first, &self.best]
            .into_iter()
            .flatten()
            .find(|known| known.edges == edges && known.labels != labels)
            .map(|known| automorphism_between(&known.labels, &labels));
        if let Some(perm) = automorphism {
            self.automorphisms.push(perm);
        }

        let leaf = Leaf { labels, edges };
        if self.first.is_none() {
            self.first = Some(leaf.clone());
        }
        if self.best.as_ref().map_or(true, |current| leaf.edges < current.edges) {
            self.best = Some(leaf);
        }
    }
}

/// Maps each node to the node that `known` gives the label `labels` gives it.
fn automorphism_between(known: &[usize], labels: &[usize]) -> Vec<usize> {
    let mut by_label = vec![0; known.len()];
    for (node, &label) in known.iter().enumerate() {
        by_label[label] = node;
    }
    labels.iter().map(|&label| by_label[label]).collect()
}
