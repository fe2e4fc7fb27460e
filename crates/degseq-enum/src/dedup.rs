use std::collections::BTreeMap;

use degseq_core::{Configuration, IsomorphismOracle, RealizeError};
use degseq_graph::SimpleGraph;
use degseq_iso::{canonical_form_with, CanonicalForm};

enum Backend<'o> {
    Pairwise(&'o dyn IsomorphismOracle),
    Canonical(BTreeMap<CanonicalForm, usize>),
}

/// Pairwise non-isomorphic configurations over a fixed node count.
///
/// Members are only ever appended; the first configuration of each
/// isomorphism class to arrive is kept.
pub struct UniqueConfigurationSet<'o> {
    node_count: usize,
    backend: Backend<'o>,
    members: Vec<Configuration>,
    graphs: Vec<SimpleGraph>,
    comparisons: u64,
}

impl<'o> UniqueConfigurationSet<'o> {
    /// Empty set that compares candidates against every member with `oracle`.
    pub fn pairwise(node_count: usize, oracle: &'o dyn IsomorphismOracle) -> Self {
        Self::with_backend(node_count, Backend::Pairwise(oracle))
    }

    /// Empty set keyed by canonical form.
    pub fn canonical(node_count: usize) -> Self {
        Self::with_backend(node_count, Backend::Canonical(BTreeMap::new()))
    }

    fn with_backend(node_count: usize, backend: Backend<'o>) -> Self {
        Self {
            node_count,
            backend,
            members: Vec::new(),
            graphs: Vec::new(),
            comparisons: 0,
        }
    }

    /// Inserts `config` unless an isomorphic member exists; returns whether it was added.
    pub fn insert(&mut self, config: Configuration) -> Result<bool, RealizeError> {
        self.insert_with(config, &|| Ok(()))
    }

    /// [`Self::insert`] that polls `interrupt` between oracle calls and inside
    /// the canonical labelling search.
    pub fn insert_with(
        &mut self,
        config: Configuration,
        interrupt: &dyn Fn() -> Result<(), RealizeError>,
    ) -> Result<bool, RealizeError> {
        let graph = SimpleGraph::from_configuration(self.node_count, &config)?;
        match &mut self.backend {
            Backend::Pairwise(oracle) => {
                for existing in &self.graphs {
                    interrupt()?;
                    self.comparisons += 1;
                    if oracle.are_isomorphic(&graph, existing)? {
                        return Ok(false);
                    }
                }
            }
            Backend::Canonical(index) => {
                let form = canonical_form_with(&graph, interrupt)?;
                if index.contains_key(&form) {
                    return Ok(false);
                }
                index.insert(form, self.members.len());
            }
        }
        self.members.push(config);
        self.graphs.push(graph);
        Ok(true)
    }

    /// Number of representatives.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no representative was accepted yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Node count the members are interpreted over.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Representatives in insertion order.
    pub fn members(&self) -> &[Configuration] {
        &self.members
    }

    /// Oracle calls made so far (always zero in canonical mode).
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Consumes the set, returning the representatives in insertion order.
    pub fn into_members(self) -> Vec<Configuration> {
        self.members
    }
}
