use degseq_core::provenance::SchemaVersion;
use degseq_core::{ErrorInfo, RealizeError, UndirectedGraph};
use serde::{Deserialize, Serialize};

use crate::simple::SimpleGraph;

const GRAPH_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &SimpleGraph) -> Result<Vec<u8>, RealizeError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| RealizeError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<SimpleGraph, RealizeError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| RealizeError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &SimpleGraph) -> Result<String, RealizeError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| RealizeError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<SimpleGraph, RealizeError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| RealizeError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    schema_version: SchemaVersion,
    nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl SerializableGraph {
    fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            schema_version: GRAPH_SCHEMA,
            nodes: graph.node_count(),
            edges: graph.configuration().to_pairs(),
        }
    }

    fn into_graph(self) -> Result<SimpleGraph, RealizeError> {
        if self.schema_version.major != GRAPH_SCHEMA.major {
            return Err(RealizeError::Serde(
                ErrorInfo::new("schema-mismatch", "unsupported graph schema version")
                    .with_context("found", self.schema_version.major.to_string())
                    .with_context("expected", GRAPH_SCHEMA.major.to_string()),
            ));
        }
        SimpleGraph::from_pairs(self.nodes, &self.edges)
    }
}
