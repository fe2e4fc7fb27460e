use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, RealizeError};

/// Required degree of every node, indexed by node position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreeSequence(Vec<usize>);

impl DegreeSequence {
    /// Wraps an already non-negative list of degrees.
    pub fn new(degrees: Vec<usize>) -> Self {
        Self(degrees)
    }

    /// Validates signed input, rejecting negative degrees.
    pub fn from_signed(values: &[i64]) -> Result<Self, RealizeError> {
        let mut degrees = Vec::with_capacity(values.len());
        for (node, &value) in values.iter().enumerate() {
            let degree = usize::try_from(value).map_err(|_| {
                RealizeError::Sequence(
                    ErrorInfo::new("negative-degree", "degrees must be non-negative integers")
                        .with_context("node", node.to_string())
                        .with_context("value", value.to_string()),
                )
            })?;
            degrees.push(degree);
        }
        Ok(Self(degrees))
    }

    /// Returns the degrees in node order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of nodes described by the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the sequence describes zero nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all degrees.
    pub fn sum(&self) -> usize {
        self.0.iter().sum()
    }

    /// Number of edges a realization must have, or `None` for an odd sum.
    pub fn edge_count(&self) -> Option<usize> {
        let sum = self.sum();
        (sum % 2 == 0).then_some(sum / 2)
    }

    /// Largest required degree (zero for the empty sequence).
    pub fn max_degree(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Copy of the degrees sorted in descending order.
    pub fn sorted_descending(&self) -> Vec<usize> {
        let mut sorted = self.0.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// Number of nodes sharing each degree value.
    pub fn multiplicities(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for &degree in &self.0 {
            *counts.entry(degree).or_insert(0) += 1;
        }
        counts
    }

    /// Signed view used by the feasibility test.
    pub fn to_signed(&self) -> Vec<i64> {
        self.0.iter().map(|&degree| degree as i64).collect()
    }
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        Self(degrees)
    }
}

impl fmt::Display for DegreeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, degree) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{degree}")?;
        }
        write!(f, "]")
    }
}

/// Unordered pair of distinct nodes, stored with the smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Edge {
    u: usize,
    v: usize,
}

impl Edge {
    /// Creates an edge between two distinct nodes in either order.
    pub fn new(a: usize, b: usize) -> Result<Self, RealizeError> {
        if a == b {
            return Err(RealizeError::Graph(
                ErrorInfo::new("self-loop", "an edge must join two distinct nodes")
                    .with_context("node", a.to_string()),
            ));
        }
        Ok(Self::normalised(a, b))
    }

    fn normalised(a: usize, b: usize) -> Self {
        if a < b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// Smaller endpoint.
    pub fn u(&self) -> usize {
        self.u
    }

    /// Larger endpoint.
    pub fn v(&self) -> usize {
        self.v
    }

    /// Both endpoints as an ordered pair.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    /// Returns whether the edge is incident to `node`.
    pub fn touches(&self, node: usize) -> bool {
        self.u == node || self.v == node
    }

    /// Returns the endpoint opposite to `node`, if `node` is an endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.u == node {
            Some(self.v)
        } else if self.v == node {
            Some(self.u)
        } else {
            None
        }
    }

    /// Maps both endpoints through an injective relabelling.
    pub fn relabel(&self, map: &[usize]) -> Self {
        Self::normalised(map[self.u], map[self.v])
    }
}

impl TryFrom<(usize, usize)> for Edge {
    type Error = RealizeError;

    fn try_from((a, b): (usize, usize)) -> Result<Self, Self::Error> {
        Edge::new(a, b)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.u, self.v)
    }
}

/// Concrete edge set of a realization, kept sorted and duplicate free.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Edge>", into = "Vec<Edge>")]
pub struct Configuration {
    edges: Vec<Edge>,
}

impl Configuration {
    /// Builds a configuration, rejecting repeated edges.
    pub fn from_edges<I>(edges: I) -> Result<Self, RealizeError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut edges: Vec<Edge> = edges.into_iter().collect();
        edges.sort_unstable();
        if let Some(pair) = edges.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(RealizeError::Graph(
                ErrorInfo::new("duplicate-edge", "edge appears more than once")
                    .with_context("edge", pair[0].to_string()),
            ));
        }
        Ok(Self { edges })
    }

    /// Builds a configuration from raw node pairs.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self, RealizeError> {
        let edges = pairs
            .iter()
            .map(|&(a, b)| Edge::new(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_edges(edges)
    }

    /// Sorted edges of the configuration.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the configuration has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns whether `edge` belongs to the configuration.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.binary_search(edge).is_ok()
    }

    /// Largest node index referenced by any edge.
    pub fn max_node(&self) -> Option<usize> {
        self.edges.iter().map(|edge| edge.v()).max()
    }

    /// Applies an injective node relabelling and re-sorts the edges.
    pub fn relabel(&self, map: &[usize]) -> Self {
        let mut edges: Vec<Edge> = self.edges.iter().map(|edge| edge.relabel(map)).collect();
        edges.sort_unstable();
        Self { edges }
    }

    /// Edges as plain integer pairs, ready for persistence.
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|edge| edge.endpoints()).collect()
    }
}

impl From<&BTreeSet<Edge>> for Configuration {
    fn from(edges: &BTreeSet<Edge>) -> Self {
        Self {
            edges: edges.iter().copied().collect(),
        }
    }
}

impl TryFrom<Vec<Edge>> for Configuration {
    type Error = RealizeError;

    fn try_from(edges: Vec<Edge>) -> Result<Self, Self::Error> {
        Configuration::from_edges(edges)
    }
}

impl From<Configuration> for Vec<Edge> {
    fn from(config: Configuration) -> Self {
        config.edges
    }
}
