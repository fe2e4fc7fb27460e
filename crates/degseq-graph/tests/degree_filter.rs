use degseq_core::{Configuration, DegreeSequence};
use degseq_graph::{check_degree_constraints, realized_degrees};

fn edges(pairs: &[(usize, usize)]) -> Configuration {
    Configuration::from_pairs(pairs).unwrap()
}

#[test]
fn five_cycle_matches_two_regular_sequence() {
    let cycle = edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]);
    let sequence = DegreeSequence::new(vec![2, 2, 2, 2, 2]);
    assert!(check_degree_constraints(cycle.edges(), &sequence));
}

#[test]
fn path_endpoints_fail_two_regular_sequence() {
    let path = edges(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
    let sequence = DegreeSequence::new(vec![2, 2, 2, 2, 2]);
    assert!(!check_degree_constraints(path.edges(), &sequence));
}

#[test]
fn filter_is_positional_not_multiset() {
    // Star centred on node 0 has degrees [3,1,1,1]; the same multiset in a
    // different order must be rejected.
    let star = edges(&[(0, 1), (0, 2), (0, 3)]);
    assert!(check_degree_constraints(
        star.edges(),
        &DegreeSequence::new(vec![3, 1, 1, 1])
    ));
    assert!(!check_degree_constraints(
        star.edges(),
        &DegreeSequence::new(vec![1, 3, 1, 1])
    ));
}

#[test]
fn out_of_range_edges_are_rejected() {
    let config = edges(&[(0, 5)]);
    assert!(!check_degree_constraints(
        config.edges(),
        &DegreeSequence::new(vec![1, 1])
    ));
    assert_eq!(realized_degrees(2, config.edges()), None);
    assert_eq!(realized_degrees(6, config.edges()), Some(vec![1, 0, 0, 0, 0, 1]));
}
