use std::collections::{BTreeSet, VecDeque};

use degseq_core::{Configuration, DegreeSequence, RealizeError};
use degseq_graph::{havel_hakimi, switch_neighbours, SimpleGraph};
use tracing::debug;

use crate::candidates::CandidateScan;
use crate::cancel::Watchdog;

/// Every labelled realization reachable from the Havel–Hakimi graph by
/// double-edge switches.
///
/// Switches connect all labelled realizations of a sequence, so the closure
/// equals the set the exhaustive scan accepts. The caller must only pass
/// graphical sequences.
pub(crate) fn switch_closure(
    sequence: &DegreeSequence,
    watchdog: &Watchdog<'_>,
) -> Result<CandidateScan, RealizeError> {
    let node_count = sequence.len();
    let seed = havel_hakimi(sequence)?.configuration();

    let mut seen: BTreeSet<Configuration> = BTreeSet::new();
    let mut queue = VecDeque::new();
    seen.insert(seed.clone());
    queue.push_back(seed);

    let mut examined = 0u64;
    while let Some(config) = queue.pop_front() {
        watchdog.check()?;
        examined += 1;
        let graph = SimpleGraph::from_configuration(node_count, &config)?;
        for next in switch_neighbours(&graph)? {
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    debug!(states = seen.len(), "switch closure explored");

    Ok(CandidateScan {
        matches: seen.into_iter().collect(),
        examined,
    })
}
