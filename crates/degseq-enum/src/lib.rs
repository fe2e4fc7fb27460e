#![deny(missing_docs)]
#![doc = "Feasibility testing and enumeration of the non-isomorphic simple graphs \
realizing a degree sequence."]

/// Cooperative cancellation and deadlines.
pub mod cancel;
/// Edge-subset candidate generation and the degree filter stage.
pub mod candidates;
/// Isomorphism-free accumulation of representatives.
pub mod dedup;
/// Erdős–Gallai feasibility test.
pub mod feasibility;
/// Enumeration options and their YAML form.
pub mod options;
/// Persisted realization reports.
pub mod report;
/// JSON helpers for reports.
#[path = "serde.rs"]
pub mod serde_io;
mod switching;

use degseq_core::{Configuration, DegreeSequence, ErrorInfo, IsomorphismOracle, RealizeError};
use degseq_iso::{oracle_by_name, BacktrackOracle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use cancel::CancelToken;
pub use candidates::{all_pairs, candidate_count, CandidateScan};
pub use dedup::UniqueConfigurationSet;
pub use feasibility::{check_graphical, is_graphical, is_graphical_sequence, Infeasibility};
pub use options::{DedupMode, EnumerateOptions, Strategy};
pub use report::{labelled_copies, run_provenance, RealizationReport, RepresentativeEntry};

use cancel::Watchdog;

/// Counters describing one enumeration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Whether the sequence passed the feasibility gate.
    pub feasible: bool,
    /// Edge subsets (exhaustive) or switch states (switching) examined.
    pub candidates_examined: u64,
    /// Labelled configurations matching the sequence position for position.
    pub degree_matches: u64,
    /// Oracle calls made during deduplication.
    pub comparisons: u64,
    /// Number of representatives returned.
    pub representatives: usize,
}

/// Representatives of every isomorphism class plus run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumeration {
    /// One configuration per isomorphism class.
    pub representatives: Vec<Configuration>,
    /// Counters gathered along the way.
    pub stats: EnumerationStats,
}

/// All pairwise non-isomorphic simple graphs realizing `sequence`, one
/// concrete edge set each.
///
/// Infeasible sequences, including those with an odd degree sum, give an
/// empty result. Uses the exhaustive strategy and the backtracking oracle.
pub fn enumerate(sequence: &DegreeSequence) -> Result<Vec<Configuration>, RealizeError> {
    let enumeration = enumerate_with(
        sequence,
        &EnumerateOptions::default(),
        &BacktrackOracle::new(),
        None,
    )?;
    Ok(enumeration.representatives)
}

/// Resolves the oracle named in `options` and runs [`enumerate_with`].
pub fn enumerate_with_options(
    sequence: &DegreeSequence,
    options: &EnumerateOptions,
    cancel: Option<&CancelToken>,
) -> Result<Enumeration, RealizeError> {
    let oracle = oracle_by_name(&options.oracle).ok_or_else(|| {
        RealizeError::Config(
            ErrorInfo::new("unknown-oracle", "no isomorphism oracle with this name")
                .with_context("oracle", options.oracle.clone())
                .with_hint("expected one of: backtrack, permutation"),
        )
    })?;
    enumerate_with(sequence, options, oracle.as_ref(), cancel)
}

/// Gate, generate, filter and deduplicate.
///
/// Every call starts from an empty [`UniqueConfigurationSet`]. Accepted
/// labelled configurations are sorted before insertion so the result does not
/// depend on the worker count. Oracle failures, cancellation and deadline
/// expiry abort the call; no partial result is returned.
pub fn enumerate_with(
    sequence: &DegreeSequence,
    options: &EnumerateOptions,
    oracle: &dyn IsomorphismOracle,
    cancel: Option<&CancelToken>,
) -> Result<Enumeration, RealizeError> {
    let watchdog = Watchdog::new(cancel, options.deadline_ms);
    watchdog.check()?;

    if let Err(reason) = check_graphical(&sequence.to_signed()) {
        info!(sequence = %sequence, %reason, "sequence is not graphical");
        return Ok(Enumeration::default());
    }

    let scan = match options.strategy {
        Strategy::Exhaustive => candidates::exhaustive_scan(sequence, options.threads, &watchdog)?,
        Strategy::Switching => switching::switch_closure(sequence, &watchdog)?,
    };
    debug!(
        strategy = %options.strategy,
        examined = scan.examined,
        matches = scan.matches.len(),
        "candidate stage finished"
    );

    let mut unique = match options.dedup {
        DedupMode::Pairwise => UniqueConfigurationSet::pairwise(sequence.len(), oracle),
        DedupMode::Canonical => UniqueConfigurationSet::canonical(sequence.len()),
    };
    let degree_matches = scan.matches.len() as u64;
    let interrupt = || watchdog.check();
    for config in scan.matches {
        watchdog.check()?;
        unique.insert_with(config, &interrupt)?;
    }

    let comparisons = unique.comparisons();
    let representatives = unique.into_members();
    info!(
        sequence = %sequence,
        dedup = %options.dedup,
        oracle = oracle.name(),
        representatives = representatives.len(),
        "enumeration finished"
    );
    Ok(Enumeration {
        stats: EnumerationStats {
            feasible: true,
            candidates_examined: scan.examined,
            degree_matches,
            comparisons,
            representatives: representatives.len(),
        },
        representatives,
    })
}
