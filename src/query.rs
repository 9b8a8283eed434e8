// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Serializable geometric queries
//!
//! Queries describe lines and planes by their construction arguments, so
//! they can be read from JSON. Building goes through the checked
//! constructors: malformed input becomes a [`GeometryError`], never a panic.
//!
//! [`GeometryError`]: crate::error::GeometryError

use crate::error::Result;
use crate::geometry::{Line, LineMethod, Plane, PlaneMethod, Relation, Tolerance};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Plain `[x, y, z]` triple as it appears in query files
pub type Coords = [f64; 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineSpec {
    PointVector { point: Coords, direction: Coords },
    PointPoint { from: Coords, to: Coords },
}

impl LineSpec {
    /// Construct the line, classifying degenerate input with `tolerance`
    pub fn build(&self, tolerance: Tolerance) -> Result<Line> {
        match self {
            Self::PointVector { point, direction } => Line::try_new_with(
                Point3::from(*point),
                Vector3::from(*direction),
                LineMethod::PointVector,
                tolerance,
            ),
            Self::PointPoint { from, to } => Line::try_new_with(
                Point3::from(*from),
                Vector3::from(*to),
                LineMethod::PointPoint,
                tolerance,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaneSpec {
    PointNormal { point: Coords, normal: Coords },
    PointLine { point: Coords, line: LineSpec },
    PointTwoVectors { point: Coords, a: Coords, b: Coords },
    ThreePoints { a: Coords, b: Coords, c: Coords },
}

impl PlaneSpec {
    pub fn build(&self, tolerance: Tolerance) -> Result<Plane> {
        match self {
            Self::PointNormal { point, normal } => {
                Plane::try_from_point_and_normal(Point3::from(*point), Vector3::from(*normal))
            }
            Self::PointLine { point, line } => Plane::try_from_point_and_line_with(
                Point3::from(*point),
                &line.build(tolerance)?,
                tolerance,
            ),
            Self::PointTwoVectors { point, a, b } => Plane::try_new_with(
                Point3::from(*point),
                Vector3::from(*a),
                Vector3::from(*b),
                PlaneMethod::PointTwoVectors,
                tolerance,
            ),
            Self::ThreePoints { a, b, c } => Plane::try_new_with(
                Point3::from(*a),
                Vector3::from(*b),
                Vector3::from(*c),
                PlaneMethod::ThreePoints,
                tolerance,
            ),
        }
    }
}

fn absolute_by_default() -> bool {
    true
}

/// A single relation, intersection or distance query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    VectorRelation {
        a: Coords,
        b: Coords,
    },
    PlaneRelation {
        a: PlaneSpec,
        b: PlaneSpec,
    },
    PlaneLineRelation {
        plane: PlaneSpec,
        line: LineSpec,
    },
    PlanePointRelation {
        plane: PlaneSpec,
        point: Coords,
    },
    LineRelation {
        a: LineSpec,
        b: LineSpec,
    },
    LinePointRelation {
        line: LineSpec,
        point: Coords,
    },
    PlaneLineIntersection {
        plane: PlaneSpec,
        line: LineSpec,
    },
    PlaneIntersection {
        a: PlaneSpec,
        b: PlaneSpec,
    },
    Distance {
        plane: PlaneSpec,
        point: Coords,
        #[serde(default = "absolute_by_default")]
        absolute: bool,
    },
    ElemWiseDivision {
        a: Coords,
        b: Coords,
    },
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VectorRelation { .. } => "vector relation",
            Self::PlaneRelation { .. } => "plane relation",
            Self::PlaneLineRelation { .. } => "plane/line relation",
            Self::PlanePointRelation { .. } => "plane/point relation",
            Self::LineRelation { .. } => "line relation",
            Self::LinePointRelation { .. } => "line/point relation",
            Self::PlaneLineIntersection { .. } => "plane/line intersection",
            Self::PlaneIntersection { .. } => "plane intersection",
            Self::Distance { .. } => "distance",
            Self::ElemWiseDivision { .. } => "element-wise division",
        }
    }
}

/// Query file contents: one query or a list of them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryBatch {
    Many(Vec<Query>),
    One(Query),
}

impl QueryBatch {
    pub fn into_queries(self) -> Vec<Query> {
        match self {
            Self::Many(queries) => queries,
            Self::One(query) => vec![query],
        }
    }
}

/// Result of evaluating a [`Query`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Answer {
    Relation { relation: Relation },
    /// `None` when the plane and line have no unique intersection
    Point { point: Option<Coords> },
    /// `None` when the planes are parallel or coincide
    Line { line: Option<Line> },
    Distance { distance: f64 },
    Vector { vector: Coords },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_parse_distance_query() {
        let json = r#"{
            "op": "distance",
            "plane": { "kind": "point_normal", "point": [0, 0, 0], "normal": [0, 0, 1] },
            "point": [5, 5, 3]
        }"#;
        let query: Query = serde_json::from_str(json).unwrap();

        match &query {
            Query::Distance { plane, point, absolute } => {
                assert!(*absolute);
                assert_eq!(*point, [5.0, 5.0, 3.0]);
                assert!(plane.build(Tolerance::default()).is_ok());
            }
            other => panic!("unexpected query: {other:?}"),
        }
        assert_eq!(query.name(), "distance");
    }

    #[test]
    fn test_parse_batch() {
        let json = r#"[
            { "op": "vector_relation", "a": [1, 0, 0], "b": [0, 1, 0] },
            { "op": "line_point_relation",
              "line": { "kind": "point_point", "from": [0, 0, 0], "to": [1, 1, 0] },
              "point": [2, 2, 0] }
        ]"#;
        let batch: QueryBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.into_queries().len(), 2);

        let single: QueryBatch =
            serde_json::from_str(r#"{ "op": "vector_relation", "a": [1, 0, 0], "b": [1, 0, 0] }"#)
                .unwrap();
        assert_eq!(single.into_queries().len(), 1);
    }

    #[test]
    fn test_degenerate_specs_are_errors() {
        let line = LineSpec::PointPoint {
            from: [1.0, 2.0, 3.0],
            to: [1.0, 2.0, 3.0],
        };
        assert_eq!(line.build(Tolerance::default()), Err(GeometryError::CoincidentPoints));

        let plane = PlaneSpec::PointLine {
            point: [2.0, 0.0, 0.0],
            line: LineSpec::PointVector {
                point: [0.0, 0.0, 0.0],
                direction: [1.0, 0.0, 0.0],
            },
        };
        assert_eq!(plane.build(Tolerance::default()), Err(GeometryError::PointOnLine));
    }

    #[test]
    fn test_answer_serialization() {
        let answer = Answer::Relation {
            relation: Relation::IdenticalOrMultiple,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["result"], "relation");
        assert_eq!(json["relation"], "identical_or_multiple");

        let json = serde_json::to_value(Answer::Point { point: None }).unwrap();
        assert!(json["point"].is_null());
    }
}
