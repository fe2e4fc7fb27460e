use degseq_core::{Configuration, UndirectedGraph};
use sha2::{Digest, Sha256};

use crate::simple::SimpleGraph;

/// Hash of the labelled graph: node count plus its sorted edge list.
///
/// Two graphs hash equally only when their edge sets are literally equal; use
/// the canonical hash from the isomorphism crate for relabelling-invariant keys.
pub fn structural_hash(graph: &SimpleGraph) -> String {
    configuration_hash(graph.node_count(), &graph.configuration())
}

/// Hash of a configuration interpreted over `node_count` nodes.
pub fn configuration_hash(node_count: usize, config: &Configuration) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"degseq:labelled");
    hasher.update((node_count as u64).to_le_bytes());
    hasher.update((config.len() as u64).to_le_bytes());
    for edge in config.edges() {
        let (u, v) = edge.endpoints();
        hasher.update((u as u64).to_le_bytes());
        hasher.update((v as u64).to_le_bytes());
    }
    hex::encode(hasher.finalize())
}
