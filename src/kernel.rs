// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel API bound to one tolerance

use crate::config::KernelConfig;
use crate::error::Result;
use crate::geometry::{distance_with, Intersect, Plane, Relate, Relation, Tolerance};
use crate::query::{Answer, Query};
use crate::utils::elem_wise_division;
use log::debug;
use nalgebra::{Point3, Vector3};

/// Runs every classification and query with the same tolerance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kernel {
    tolerance: Tolerance,
}

impl Kernel {
    /// Create a kernel using the default tolerance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        Self::with_tolerance(config.tolerance)
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn relation<A, B>(&self, a: &A, b: &B) -> Relation
    where
        A: Relate<B>,
    {
        a.relation_with(b, self.tolerance)
    }

    pub fn intersect<A, B>(&self, a: &A, b: &B) -> Option<A::Output>
    where
        A: Intersect<B>,
    {
        a.intersect_with(b, self.tolerance)
    }

    pub fn distance(&self, plane: &Plane, point: &Point3<f64>, absolute: bool) -> f64 {
        distance_with(plane, point, absolute, self.tolerance)
    }

    /// Build the operands of `query` and evaluate it
    pub fn evaluate(&self, query: &Query) -> Result<Answer> {
        debug!("evaluating {} query", query.name());
        let tol = self.tolerance;

        let answer = match query {
            Query::VectorRelation { a, b } => Answer::Relation {
                relation: self.relation(&Vector3::from(*a), &Vector3::from(*b)),
            },
            Query::PlaneRelation { a, b } => Answer::Relation {
                relation: self.relation(&a.build(tol)?, &b.build(tol)?),
            },
            Query::PlaneLineRelation { plane, line } => Answer::Relation {
                relation: self.relation(&plane.build(tol)?, &line.build(tol)?),
            },
            Query::PlanePointRelation { plane, point } => Answer::Relation {
                relation: self.relation(&plane.build(tol)?, &Point3::from(*point)),
            },
            Query::LineRelation { a, b } => Answer::Relation {
                relation: self.relation(&a.build(tol)?, &b.build(tol)?),
            },
            Query::LinePointRelation { line, point } => Answer::Relation {
                relation: self.relation(&line.build(tol)?, &Point3::from(*point)),
            },
            Query::PlaneLineIntersection { plane, line } => Answer::Point {
                point: self
                    .intersect(&plane.build(tol)?, &line.build(tol)?)
                    .map(|p| [p.x, p.y, p.z]),
            },
            Query::PlaneIntersection { a, b } => Answer::Line {
                line: self.intersect(&a.build(tol)?, &b.build(tol)?),
            },
            Query::Distance {
                plane,
                point,
                absolute,
            } => Answer::Distance {
                distance: self.distance(&plane.build(tol)?, &Point3::from(*point), *absolute),
            },
            Query::ElemWiseDivision { a, b } => {
                let q = elem_wise_division(&Vector3::from(*a), &Vector3::from(*b));
                Answer::Vector {
                    vector: [q.x, q.y, q.z],
                }
            }
        };

        Ok(answer)
    }
}
