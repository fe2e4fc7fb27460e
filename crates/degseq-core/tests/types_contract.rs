use degseq_core::{Configuration, DegreeSequence, Edge, RealizeError};

#[test]
fn edges_are_normalised_and_reject_loops() {
    let edge = Edge::new(4, 1).unwrap();
    assert_eq!(edge.endpoints(), (1, 4));
    assert_eq!(edge.other(1), Some(4));
    assert_eq!(edge.other(2), None);

    let err = Edge::new(3, 3).unwrap_err();
    assert_eq!(err.code(), "self-loop");
}

#[test]
fn configuration_rejects_duplicate_edges() {
    let err = Configuration::from_pairs(&[(0, 1), (1, 0)]).unwrap_err();
    match err {
        RealizeError::Graph(info) => assert_eq!(info.code, "duplicate-edge"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn configuration_is_sorted_and_relabels() {
    let config = Configuration::from_pairs(&[(2, 3), (0, 1), (1, 2)]).unwrap();
    assert_eq!(config.to_pairs(), vec![(0, 1), (1, 2), (2, 3)]);
    assert!(config.contains(&Edge::new(3, 2).unwrap()));

    let reversed = config.relabel(&[3, 2, 1, 0]);
    assert_eq!(reversed.to_pairs(), vec![(0, 1), (1, 2), (2, 3)]);
    let shifted = config.relabel(&[1, 0, 3, 2]);
    assert_eq!(shifted.to_pairs(), vec![(0, 1), (0, 3), (2, 3)]);
}

#[test]
fn degree_sequence_validates_sign() {
    let seq = DegreeSequence::from_signed(&[3, 3, 2, 2, 1, 1]).unwrap();
    assert_eq!(seq.sum(), 12);
    assert_eq!(seq.edge_count(), Some(6));
    assert_eq!(seq.sorted_descending(), vec![3, 3, 2, 2, 1, 1]);
    assert_eq!(seq.multiplicities().get(&2), Some(&2));

    let err = DegreeSequence::from_signed(&[2, -1, 1]).unwrap_err();
    assert_eq!(err.code(), "negative-degree");
    assert_eq!(err.info().context.get("node"), Some(&"1".to_string()));
}

#[test]
fn odd_sum_has_no_edge_count() {
    let seq = DegreeSequence::new(vec![3, 3, 3, 2, 2]);
    assert_eq!(seq.edge_count(), None);
    assert_eq!(DegreeSequence::new(vec![3, 3, 3, 2, 1]).edge_count(), Some(6));
}
