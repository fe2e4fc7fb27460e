#![deny(missing_docs)]

//! Simple undirected graphs induced by edge configurations, with the degree
//! filter, Havel–Hakimi construction and degree-preserving switches.

mod degree;
mod generators;
mod hash;
mod rewire;
mod serialization;
mod simple;

pub use degree::{check_degree_constraints, realized_degrees};
pub use generators::{havel_hakimi, random_realization};
pub use hash::{configuration_hash, structural_hash};
pub use rewire::{
    switch_edges, switch_edges_dry_run, switch_neighbours, switch_random, SwitchDryRun,
    SwitchOrientation, SwitchOutcome,
};
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
pub use simple::SimpleGraph;
