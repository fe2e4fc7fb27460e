use degseq_core::provenance::{RunProvenance, SchemaVersion};
use degseq_core::{Configuration, DegreeSequence};

#[test]
fn configuration_serialises_as_pair_list() {
    let config = Configuration::from_pairs(&[(1, 0), (2, 1)]).unwrap();
    let json = serde_json::to_string(&config).expect("serialize");
    assert_eq!(json, "[[0,1],[1,2]]");
    let decoded: Configuration = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, config);
}

#[test]
fn invalid_configurations_fail_to_deserialize() {
    assert!(serde_json::from_str::<Configuration>("[[0,0]]").is_err());
    assert!(serde_json::from_str::<Configuration>("[[0,1],[1,0]]").is_err());
}

#[test]
fn provenance_round_trips_json() {
    let provenance = RunProvenance {
        degree_sequence: vec![2, 2, 2],
        strategy: "exhaustive".into(),
        dedup: "pairwise".into(),
        seed: None,
        created_at: "2024-01-01T00:00:00Z".into(),
        tool_versions: [("degseq-core".into(), "0.1.0".into())].into_iter().collect(),
    };
    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    assert!(!json.contains("seed"));
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, provenance);

    let version: SchemaVersion = serde_json::from_str(r#"{"major":1,"minor":2,"patch":3}"#).unwrap();
    assert_eq!(version, SchemaVersion::new(1, 2, 3));

    let seq: DegreeSequence = serde_json::from_str("[3,1,1,1]").unwrap();
    assert_eq!(seq.len(), 4);
}
