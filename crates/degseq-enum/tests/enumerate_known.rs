use degseq_core::{Configuration, DegreeSequence, IsomorphismOracle, RealizeError};
use degseq_enum::{enumerate, enumerate_with, enumerate_with_options, EnumerateOptions};
use degseq_graph::{check_degree_constraints, SimpleGraph};
use degseq_iso::BacktrackOracle;

fn seq(degrees: &[usize]) -> DegreeSequence {
    DegreeSequence::new(degrees.to_vec())
}

fn assert_pairwise_distinct(sequence: &DegreeSequence, result: &[Configuration]) {
    let oracle = BacktrackOracle::new();
    let graphs: Vec<SimpleGraph> = result
        .iter()
        .map(|config| SimpleGraph::from_configuration(sequence.len(), config).unwrap())
        .collect();
    for (idx, a) in graphs.iter().enumerate() {
        for b in &graphs[idx + 1..] {
            assert!(!oracle.are_isomorphic(a, b).unwrap());
        }
    }
}

#[test]
fn small_case_is_realized() -> Result<(), RealizeError> {
    let sequence = seq(&[3, 3, 2, 2, 1, 1]);
    let result = enumerate(&sequence)?;
    assert!(!result.is_empty());
    for config in &result {
        assert_eq!(config.len(), 6);
        assert!(check_degree_constraints(config.edges(), &sequence));
    }
    assert_pairwise_distinct(&sequence, &result);
    Ok(())
}

#[test]
fn even_sum_open_question_case_has_one_class() -> Result<(), RealizeError> {
    let sequence = seq(&[3, 3, 3, 2, 1]);
    let result = enumerate(&sequence)?;
    assert_eq!(result.len(), 1);
    assert!(check_degree_constraints(result[0].edges(), &sequence));
    Ok(())
}

#[test]
fn infeasible_sequences_give_empty_results() -> Result<(), RealizeError> {
    assert!(enumerate(&seq(&[3, 3, 3, 2, 2]))?.is_empty());
    assert!(enumerate(&seq(&[1, 1, 1]))?.is_empty());
    assert!(enumerate(&seq(&[3, 3, 1, 1]))?.is_empty());
    assert!(enumerate(&seq(&[4, 2, 1, 1]))?.is_empty());
    Ok(())
}

#[test]
fn known_class_counts() -> Result<(), RealizeError> {
    let cases: [(&[usize], usize); 7] = [
        (&[2, 2, 2, 2, 2], 1),
        (&[1, 1, 1, 1], 1),
        (&[2, 2, 2, 2, 2, 2], 2),
        (&[3, 3, 3, 3, 3, 3], 2),
        (&[3, 1, 1, 1], 1),
        (&[2, 2, 2, 1, 1], 2),
        (&[0, 0, 0], 1),
    ];
    for (degrees, expected) in cases {
        let sequence = seq(degrees);
        let result = enumerate(&sequence)?;
        assert_eq!(result.len(), expected, "{sequence}");
        assert_pairwise_distinct(&sequence, &result);
    }
    Ok(())
}

#[test]
fn empty_sequence_has_the_empty_graph() -> Result<(), RealizeError> {
    let result = enumerate(&seq(&[]))?;
    assert_eq!(result, vec![Configuration::default()]);
    Ok(())
}

#[test]
fn stats_count_labelled_matches() -> Result<(), RealizeError> {
    let sequence = seq(&[2, 2, 2, 2, 2, 2]);
    let run = enumerate_with(&sequence, &EnumerateOptions::default(), &BacktrackOracle::new(), None)?;
    assert!(run.stats.feasible);
    // 60 labelled hexagons plus 10 labelled pairs of triangles.
    assert_eq!(run.stats.degree_matches, 70);
    // C(15, 6) subsets of the node pairs.
    assert_eq!(run.stats.candidates_examined, 5005);
    assert_eq!(run.stats.representatives, 2);

    let infeasible = enumerate_with(&seq(&[3, 3, 1, 1]), &EnumerateOptions::default(), &BacktrackOracle::new(), None)?;
    assert!(!infeasible.stats.feasible);
    assert!(infeasible.representatives.is_empty());
    Ok(())
}

#[test]
fn repeated_calls_agree() -> Result<(), RealizeError> {
    let sequence = seq(&[3, 3, 2, 2, 2, 1, 1]);
    let first = enumerate(&sequence)?;
    let second = enumerate(&sequence)?;
    assert_eq!(first.len(), second.len());
    assert_pairwise_distinct(&sequence, &first);
    assert_pairwise_distinct(&sequence, &second);
    Ok(())
}

#[test]
fn thread_count_does_not_change_the_result() -> Result<(), RealizeError> {
    let sequence = seq(&[3, 3, 2, 2, 1, 1]);
    let single = EnumerateOptions {
        threads: 1,
        ..EnumerateOptions::default()
    };
    let several = EnumerateOptions {
        threads: 4,
        ..EnumerateOptions::default()
    };
    let a = enumerate_with_options(&sequence, &single, None)?;
    let b = enumerate_with_options(&sequence, &several, None)?;
    assert_eq!(a, b);
    Ok(())
}

struct EverythingIsomorphic;

impl IsomorphismOracle for EverythingIsomorphic {
    fn name(&self) -> &'static str {
        "everything"
    }

    fn are_isomorphic(
        &self,
        _a: &dyn degseq_core::UndirectedGraph,
        _b: &dyn degseq_core::UndirectedGraph,
    ) -> Result<bool, RealizeError> {
        Ok(true)
    }
}

struct BrokenOracle;

impl IsomorphismOracle for BrokenOracle {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn are_isomorphic(
        &self,
        _a: &dyn degseq_core::UndirectedGraph,
        _b: &dyn degseq_core::UndirectedGraph,
    ) -> Result<bool, RealizeError> {
        Err(RealizeError::Isomorphism(degseq_core::ErrorInfo::new(
            "oracle-down",
            "stub failure",
        )))
    }
}

#[test]
fn injected_oracle_drives_deduplication() -> Result<(), RealizeError> {
    let sequence = seq(&[2, 2, 2, 2, 2, 2]);
    let run = enumerate_with(&sequence, &EnumerateOptions::default(), &EverythingIsomorphic, None)?;
    assert_eq!(run.representatives.len(), 1);
    assert_eq!(run.stats.comparisons, 69);
    Ok(())
}

#[test]
fn oracle_failures_abort_the_call() {
    let sequence = seq(&[2, 2, 2, 2, 2, 2]);
    let err = enumerate_with(&sequence, &EnumerateOptions::default(), &BrokenOracle, None).unwrap_err();
    assert_eq!(err.code(), "oracle-down");
}

#[test]
fn unknown_oracle_name_is_a_config_error() {
    let options = EnumerateOptions {
        oracle: "nauty".to_string(),
        ..EnumerateOptions::default()
    };
    let err = enumerate_with_options(&seq(&[1, 1]), &options, None).unwrap_err();
    assert!(matches!(err, RealizeError::Config(_)));
    assert_eq!(err.code(), "unknown-oracle");
}
