use std::sync::atomic::{AtomicU64, Ordering};

use degseq_core::{Configuration, DegreeSequence, Edge, ErrorInfo, RealizeError};
use degseq_graph::check_degree_constraints;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::cancel::Watchdog;

/// Candidates between two cancellation checks.
const POLL_INTERVAL: u64 = 1024;

/// Labelled configurations that passed the degree filter.
#[derive(Debug, Clone, Default)]
pub struct CandidateScan {
    /// Accepted configurations in ascending order.
    pub matches: Vec<Configuration>,
    /// Number of subsets (or switch states) examined.
    pub examined: u64,
}

/// All `C(n, 2)` node pairs `{u, v}`, `u < v`, in lexicographic order.
pub fn all_pairs(node_count: usize) -> Vec<Edge> {
    (0..node_count)
        .tuple_combinations()
        .filter_map(|(u, v)| Edge::new(u, v).ok())
        .collect()
}

/// Number of `m`-subsets of the node pairs, when it fits in a `u128`.
pub fn candidate_count(node_count: usize, edge_count: usize) -> Option<u128> {
    let pairs = (node_count as u128).checked_mul(node_count.saturating_sub(1) as u128)? / 2;
    binomial(pairs, edge_count as u128)
}

fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc = 1u128;
    for step in 0..k {
        acc = acc.checked_mul(n - step)? / (step + 1);
    }
    Some(acc)
}

/// Streams every `m`-subset of node pairs through the degree filter.
///
/// `m` is half the degree sum; an odd sum yields no candidates. The filter
/// runs on a rayon pool with `threads` workers (`0` for the rayon default).
pub(crate) fn exhaustive_scan(
    sequence: &DegreeSequence,
    threads: usize,
    watchdog: &Watchdog<'_>,
) -> Result<CandidateScan, RealizeError> {
    let Some(edge_count) = sequence.edge_count() else {
        return Ok(CandidateScan::default());
    };
    if edge_count == 0 {
        let empty = Configuration::default();
        let matches = if check_degree_constraints(empty.edges(), sequence) {
            vec![empty]
        } else {
            Vec::new()
        };
        return Ok(CandidateScan {
            matches,
            examined: 1,
        });
    }
    let pairs = all_pairs(sequence.len());
    debug!(
        nodes = sequence.len(),
        edges = edge_count,
        subsets = ?candidate_count(sequence.len(), edge_count),
        "scanning edge subsets"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|err| {
            RealizeError::Enumeration(ErrorInfo::new("thread-pool", err.to_string()))
        })?;

    let examined = AtomicU64::new(0);
    let accepted: Result<Vec<Configuration>, RealizeError> = pool.install(|| {
        pairs
            .iter()
            .copied()
            .combinations(edge_count)
            .par_bridge()
            .map(|edges| -> Result<Option<Configuration>, RealizeError> {
                let seen = examined.fetch_add(1, Ordering::Relaxed) + 1;
                if seen % POLL_INTERVAL == 0 {
                    watchdog.check()?;
                }
                if check_degree_constraints(&edges, sequence) {
                    Ok(Some(Configuration::from_edges(edges)?))
                } else {
                    Ok(None)
                }
            })
            .filter_map(Result::transpose)
            .collect()
    });

    let mut matches = accepted?;
    watchdog.check()?;
    matches.sort_unstable();
    Ok(CandidateScan {
        matches,
        examined: examined.into_inner(),
    })
}
