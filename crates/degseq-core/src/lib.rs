#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the degree-sequence realization crates."]

use std::iter::ExactSizeIterator;

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, RealizeError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Configuration, DegreeSequence, Edge};

/// Read-only view of a simple undirected graph on nodes `0..node_count()`.
pub trait UndirectedGraph: Send + Sync {
    /// Number of nodes, isolated nodes included.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all edges in ascending order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Edge> + '_>;

    /// Returns the degree of `node`.
    fn degree(&self, node: usize) -> Result<usize, RealizeError>;

    /// Returns the neighbours of `node` in ascending order.
    fn neighbours(&self, node: usize) -> Result<Vec<usize>, RealizeError>;

    /// Returns whether `a` and `b` are adjacent.
    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Degree vector in node order.
    fn degrees(&self) -> Result<Vec<usize>, RealizeError> {
        (0..self.node_count()).map(|node| self.degree(node)).collect()
    }
}

/// Exact graph isomorphism decision procedure.
pub trait IsomorphismOracle: Send + Sync {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Decides whether some relabelling of `a` yields exactly `b`.
    fn are_isomorphic(
        &self,
        a: &dyn UndirectedGraph,
        b: &dyn UndirectedGraph,
    ) -> Result<bool, RealizeError>;
}
