#![deny(missing_docs)]
#![doc = "Exact isomorphism oracles, canonical forms and automorphism statistics \
for small simple graphs."]

/// Automorphism group order and orbit statistics.
pub mod automorphism;
/// Colour-refinement backed backtracking oracle.
pub mod backtrack;
/// Exhaustive permutation oracle for cross-checking.
pub mod brute;
/// Canonical labelling and hashing.
pub mod canonical;
/// Cheap structural invariants.
pub mod invariants;

mod dense;
mod orbits;
mod refine;
mod search;

pub use automorphism::{analyse_graph, analyse_graph_with, AutomorphismReport, DEFAULT_AUTOMORPHISM_LIMIT};
pub use backtrack::BacktrackOracle;
pub use brute::{PermutationOracle, PERMUTATION_NODE_LIMIT};
pub use canonical::{canonical_form, canonical_form_with, canonical_hash, CanonicalForm};
pub use invariants::{graph_invariants, GraphInvariants};

use degseq_core::IsomorphismOracle;

/// Looks up an oracle by the name it reports.
pub fn oracle_by_name(name: &str) -> Option<Box<dyn IsomorphismOracle>> {
    match name {
        "backtrack" => Some(Box::new(BacktrackOracle::new())),
        "permutation" => Some(Box::new(PermutationOracle::new())),
        _ => None,
    }
}
