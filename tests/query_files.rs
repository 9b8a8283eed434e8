// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON query evaluation and configuration loading

use anyhow::Result;
use geokernel::{evaluate_json, Answer, Kernel, KernelConfig, Relation, Tolerance};
use tempfile::tempdir;

const QUERIES: &str = r#"[
    { "op": "vector_relation", "a": [0, 1, 0], "b": [0, -2, 0] },
    { "op": "plane_relation",
      "a": { "kind": "point_normal", "point": [0, 0, 0], "normal": [0, 0, 1] },
      "b": { "kind": "three_points", "a": [0, 0, 4], "b": [1, 0, 4], "c": [0, 1, 4] } },
    { "op": "plane_point_relation",
      "plane": { "kind": "point_two_vectors", "point": [0, 0, 0], "a": [1, 0, 0], "b": [0, 1, 0] },
      "point": [7, -3, 0] },
    { "op": "line_relation",
      "a": { "kind": "point_vector", "point": [0, 0, 0], "direction": [1, 0, 0] },
      "b": { "kind": "point_point", "from": [2, 0, 0], "to": [2, 5, 0] } },
    { "op": "plane_line_intersection",
      "plane": { "kind": "point_normal", "point": [0, 0, 1], "normal": [0, 0, 1] },
      "line": { "kind": "point_vector", "point": [0, 0, 0], "direction": [1, 0, 0] } },
    { "op": "distance",
      "plane": { "kind": "point_normal", "point": [0, 0, 0], "normal": [0, 0, 1] },
      "point": [5, 5, -3],
      "absolute": false },
    { "op": "elem_wise_division", "a": [2, 9, -1], "b": [4, 3, 1] }
]"#;

#[test]
fn test_query_batch_answers() -> Result<()> {
    let answers = evaluate_json(QUERIES, &Kernel::new())?;
    assert_eq!(answers.len(), 7);

    let relations: Vec<Relation> = answers[..4]
        .iter()
        .map(|answer| match answer {
            Answer::Relation { relation } => *relation,
            other => panic!("expected a relation, got {other:?}"),
        })
        .collect();
    assert_eq!(
        relations,
        vec![
            Relation::IdenticalOrMultiple,
            Relation::Parallel,
            Relation::Containing,
            Relation::Intersect,
        ]
    );

    assert_eq!(answers[4], Answer::Point { point: None });

    match answers[5] {
        Answer::Distance { distance } => assert!((distance + 3.0).abs() < 1e-12),
        ref other => panic!("expected a distance, got {other:?}"),
    }

    assert_eq!(
        answers[6],
        Answer::Vector {
            vector: [0.5, 3.0, -1.0]
        }
    );

    Ok(())
}

#[test]
fn test_answers_serialize_to_json() -> Result<()> {
    let answers = evaluate_json(QUERIES, &Kernel::new())?;
    let json = serde_json::to_value(&answers)?;

    assert_eq!(json[0]["relation"], "identical_or_multiple");
    assert!(json[4]["point"].is_null());
    assert_eq!(json[5]["result"], "distance");

    Ok(())
}

#[test]
fn test_degenerate_query_is_an_error() {
    let source = r#"{ "op": "line_point_relation",
        "line": { "kind": "point_point", "from": [1, 1, 1], "to": [1, 1, 1] },
        "point": [0, 0, 0] }"#;

    let err = evaluate_json(source, &Kernel::new()).unwrap_err();
    assert!(err.to_string().contains("points coincide"));
}

#[test]
fn test_configured_tolerance_changes_classification() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("geokernel.toml");
    KernelConfig {
        tolerance: Tolerance::new(1e-9),
    }
    .save(&path)?;

    let source = r#"{ "op": "vector_relation", "a": [1, 0, 0], "b": [0, 1e-7, 0] }"#;

    let strict = Kernel::from_config(&KernelConfig::load_from(&path, None)?);
    assert_eq!(
        evaluate_json(source, &strict)?,
        vec![Answer::Relation {
            relation: Relation::Orthogonal
        }]
    );

    let default = Kernel::new();
    assert_eq!(
        evaluate_json(source, &default)?,
        vec![Answer::Relation {
            relation: Relation::IdenticalOrMultiple
        }]
    );

    Ok(())
}
