use degseq_core::{DegreeSequence, RealizeError, UndirectedGraph};
use degseq_graph::{havel_hakimi, SimpleGraph};
use proptest::prelude::*;

#[test]
fn graph_construction_rejects_invalid_edges() {
    let mut graph = SimpleGraph::new(3);
    graph.add_edge(0, 1).unwrap();

    let duplicate = graph.add_edge(1, 0).unwrap_err();
    assert_eq!(duplicate.code(), "duplicate-edge");

    let looped = graph.add_edge(2, 2).unwrap_err();
    assert_eq!(looped.code(), "self-loop");

    match graph.add_edge(0, 3).unwrap_err() {
        RealizeError::Graph(info) => {
            assert_eq!(info.code, "node-out-of-range");
            assert_eq!(info.context.get("nodes"), Some(&"3".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn isolated_nodes_are_part_of_the_graph() {
    let graph = SimpleGraph::from_pairs(4, &[(0, 1), (1, 2), (0, 2)]).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.degree(3).unwrap(), 0);
    assert_eq!(graph.degrees().unwrap(), vec![2, 2, 2, 0]);
    assert_eq!(graph.neighbours(1).unwrap(), vec![0, 2]);
    assert!(graph.has_edge(2, 0));
    assert!(!graph.has_edge(3, 0));
    assert!(!graph.has_edge(9, 0));
}

#[test]
fn havel_hakimi_realizes_known_sequence() {
    let sequence = DegreeSequence::new(vec![3, 3, 2, 2, 1, 1]);
    let graph = havel_hakimi(&sequence).unwrap();
    assert_eq!(graph.degree_sequence(), sequence);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn havel_hakimi_realizes_even_sum_sequence() {
    let sequence = DegreeSequence::new(vec![3, 3, 3, 2, 1]);
    let graph = havel_hakimi(&sequence).unwrap();
    assert_eq!(graph.degree_sequence(), sequence);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn havel_hakimi_rejects_non_graphical_sequences() {
    let odd = havel_hakimi(&DegreeSequence::new(vec![3, 3, 3, 2, 2])).unwrap_err();
    assert_eq!(odd.code(), "not-graphical");
    assert_eq!(odd.info().context.get("reason"), Some(&"degree sum is odd".to_string()));

    let too_large = havel_hakimi(&DegreeSequence::new(vec![3, 3, 1, 1])).unwrap_err();
    assert_eq!(too_large.code(), "not-graphical");
    assert!(too_large.info().context.contains_key("needed"));
}

fn random_graph() -> impl Strategy<Value = SimpleGraph> {
    (1usize..9).prop_flat_map(|nodes| {
        let pairs = nodes * (nodes - 1) / 2;
        prop::collection::vec(any::<bool>(), pairs).prop_map(move |mask| {
            let mut graph = SimpleGraph::new(nodes);
            let mut bit = 0;
            for u in 0..nodes {
                for v in (u + 1)..nodes {
                    if mask[bit] {
                        graph.add_edge(u, v).unwrap();
                    }
                    bit += 1;
                }
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn havel_hakimi_realizes_every_realized_sequence(graph in random_graph()) {
        let sequence = graph.degree_sequence();
        let rebuilt = havel_hakimi(&sequence).unwrap();
        prop_assert_eq!(rebuilt.degree_sequence(), sequence);
        prop_assert_eq!(rebuilt.edge_count(), graph.edge_count());
    }
}
