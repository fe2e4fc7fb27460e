use std::collections::BTreeMap;

use chrono::Utc;
use degseq_core::{Configuration, DegreeSequence, RealizeError, RunProvenance, SchemaVersion};
use degseq_graph::{structural_hash, SimpleGraph};
use degseq_iso::{analyse_graph, canonical_hash, AutomorphismReport, DEFAULT_AUTOMORPHISM_LIMIT};
use serde::{Deserialize, Serialize};

use crate::options::EnumerateOptions;
use crate::{Enumeration, EnumerationStats};

/// Schema of [`RealizationReport`] documents.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// One representative in a persisted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeEntry {
    /// Position in the result list, starting at 1.
    pub index: usize,
    /// Edge list of the representative.
    pub edges: Configuration,
    /// Hash of the labelled edge set.
    pub hash: String,
    /// Relabelling-invariant hash of the isomorphism class.
    pub canonical_hash: String,
    /// Automorphism group statistics.
    pub automorphisms: AutomorphismReport,
    /// Labelled realizations of the exact sequence in this class, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labelled_copies: Option<u64>,
}

/// Persisted result of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizationReport {
    /// Schema version of this document.
    pub schema_version: SchemaVersion,
    /// How the run was produced.
    pub provenance: RunProvenance,
    /// Counters gathered during the run.
    pub stats: EnumerationStats,
    /// Representatives in result order.
    pub configurations: Vec<RepresentativeEntry>,
}

impl RealizationReport {
    /// Builds the report for `enumeration`, computing per-representative statistics.
    pub fn build(
        sequence: &DegreeSequence,
        enumeration: &Enumeration,
        provenance: RunProvenance,
    ) -> Result<Self, RealizeError> {
        let configurations = enumeration
            .representatives
            .iter()
            .enumerate()
            .map(|(idx, config)| describe(sequence, idx + 1, config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            schema_version: REPORT_SCHEMA,
            provenance,
            stats: enumeration.stats.clone(),
            configurations,
        })
    }

    /// Representatives' edge lists in result order.
    pub fn representatives(&self) -> Vec<Configuration> {
        self.configurations
            .iter()
            .map(|entry| entry.edges.clone())
            .collect()
    }
}

fn describe(
    sequence: &DegreeSequence,
    index: usize,
    config: &Configuration,
) -> Result<RepresentativeEntry, RealizeError> {
    let graph = SimpleGraph::from_configuration(sequence.len(), config)?;
    let automorphisms = analyse_graph(&graph, DEFAULT_AUTOMORPHISM_LIMIT)?;
    let labelled_copies = if automorphisms.truncated {
        None
    } else {
        labelled_copies(sequence, automorphisms.order)
    };
    Ok(RepresentativeEntry {
        index,
        edges: config.clone(),
        hash: structural_hash(&graph),
        canonical_hash: canonical_hash(&graph)?,
        automorphisms,
        labelled_copies,
    })
}

/// Size of an isomorphism class restricted to the exact labelled sequence:
/// the product of `m_c!` over degree multiplicities divided by the
/// automorphism group order.
pub fn labelled_copies(sequence: &DegreeSequence, automorphism_order: u64) -> Option<u64> {
    if automorphism_order == 0 {
        return None;
    }
    let mut permutations = 1u64;
    for &count in sequence.multiplicities().values() {
        for factor in 2..=count as u64 {
            permutations = permutations.checked_mul(factor)?;
        }
    }
    Some(permutations / automorphism_order)
}

/// Provenance stamped with the current time and crate versions.
pub fn run_provenance(
    sequence: &DegreeSequence,
    options: &EnumerateOptions,
    seed: Option<u64>,
) -> RunProvenance {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    tool_versions.insert("oracle".to_string(), options.oracle.clone());
    RunProvenance {
        degree_sequence: sequence.as_slice().to_vec(),
        strategy: options.strategy.to_string(),
        dedup: options.dedup.to_string(),
        seed,
        created_at: Utc::now().to_rfc3339(),
        tool_versions,
    }
}
