// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed-form intersection and distance queries
//!
//! Queries dispatch on [`Relation`]: only a genuine `Intersect` relation yields
//! a result, every degenerate configuration yields `None`.

use super::line::Line;
use super::plane::Plane;
use super::relation::{Relate, Relation};
use super::tolerance::Tolerance;
use log::trace;
use nalgebra::Point3;

/// Intersect `Self` with `Rhs`
pub trait Intersect<Rhs: ?Sized = Self> {
    type Output;

    fn intersect_with(&self, other: &Rhs, tolerance: Tolerance) -> Option<Self::Output>;

    fn intersect(&self, other: &Rhs) -> Option<Self::Output> {
        self.intersect_with(other, Tolerance::default())
    }
}

/// Intersect two quantities with the default tolerance
pub fn intersect<A, B>(a: &A, b: &B) -> Option<A::Output>
where
    A: Intersect<B>,
{
    a.intersect(b)
}

impl Intersect<Line> for Plane {
    type Output = Point3<f64>;

    /// `None` when the line is parallel to the plane or lies in it
    fn intersect_with(&self, line: &Line, tolerance: Tolerance) -> Option<Point3<f64>> {
        let relation = self.relation_with(line, tolerance);
        if relation != Relation::Intersect {
            trace!("plane and line have no unique intersection: {relation}");
            return None;
        }

        let normal = self.normal();
        let r = (normal.dot(&self.point().coords) - normal.dot(&line.point().coords))
            / normal.dot(&line.direction());
        Some(line.point_on_line(r))
    }
}

impl Intersect for Plane {
    type Output = Line;

    /// `None` when the planes are parallel or coincide
    fn intersect_with(&self, other: &Plane, tolerance: Tolerance) -> Option<Line> {
        let relation = self.relation_with(other, tolerance);
        if relation != Relation::Intersect {
            trace!("planes have no intersection line: {relation}");
            return None;
        }

        let direction = self.normal().cross(&other.normal());

        // Runs inside `self`, across the intersection line
        let across = direction.cross(&self.normal()).normalize();
        let guide = Line::from_normalized(self.point(), across);

        let point = other.intersect_with(&guide, tolerance)?;
        Some(Line::from_normalized(point, direction.normalize()))
    }
}

/// Distance from `point` to `plane`.
///
/// With `absolute == false` the result is signed, positive on the side the
/// normal points toward.
pub fn distance(plane: &Plane, point: &Point3<f64>, absolute: bool) -> f64 {
    distance_with(plane, point, absolute, Tolerance::default())
}

pub fn distance_with(plane: &Plane, point: &Point3<f64>, absolute: bool, tolerance: Tolerance) -> f64 {
    let projected = project_with(plane, point, tolerance);
    let offset = point - projected;
    debug_assert_eq!(
        offset.relation_with(&plane.normal(), tolerance),
        Relation::IdenticalOrMultiple,
        "projection offset is not along the plane normal"
    );

    let magnitude = offset.norm();
    if !absolute && offset.dot(&plane.normal()) < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Foot of the perpendicular from `point` onto `plane`
pub fn project_with(plane: &Plane, point: &Point3<f64>, tolerance: Tolerance) -> Point3<f64> {
    assert!(
        plane.is_initialized(),
        "distance queried on an uninitialized plane"
    );

    let perpendicular = Line::from_normalized(*point, plane.normal());
    match plane.intersect_with(&perpendicular, tolerance) {
        Some(foot) => foot,
        None => unreachable!("a line along the plane normal always crosses the plane"),
    }
}
