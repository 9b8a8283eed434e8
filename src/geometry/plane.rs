// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Infinite plane through a point with a unit normal

use super::intersect;
use super::line::Line;
use super::relation::{Relate, Relation};
use super::tolerance::Tolerance;
use crate::error::{GeometryError, Result};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// How the two vector arguments of a plane are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneMethod {
    /// Both vectors are directions spanning the plane
    PointTwoVectors,
    /// Both vectors are positions of two more points on the plane
    #[default]
    ThreePoints,
}

/// Infinite plane represented by a point and a unit normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plane {
    point: Point3<f64>,
    normal: Vector3<f64>,
    initialized: bool,
}

impl Plane {
    /// Plane containing `line` and the external `point`
    pub fn from_point_and_line(point: Point3<f64>, line: &Line) -> Self {
        match Self::try_from_point_and_line(point, line) {
            Ok(plane) => plane,
            Err(err) => panic!("invalid plane construction: {err}"),
        }
    }

    pub fn try_from_point_and_line(point: Point3<f64>, line: &Line) -> Result<Self> {
        Self::try_from_point_and_line_with(point, line, Tolerance::default())
    }

    /// Checked construction where `tolerance` decides whether `point` lies on `line`
    pub fn try_from_point_and_line_with(
        point: Point3<f64>,
        line: &Line,
        tolerance: Tolerance,
    ) -> Result<Self> {
        if !line.is_initialized() {
            return Err(GeometryError::Uninitialized("line"));
        }

        let offset = point - line.point();
        if offset.relation_with(&line.direction(), tolerance) == Relation::IdenticalOrMultiple {
            return Err(GeometryError::PointOnLine);
        }

        line.direction()
            .cross(&offset)
            .try_normalize(0.0)
            .map(|normal| Self::from_unit_normal(point, normal))
            .ok_or(GeometryError::PointOnLine)
    }

    /// Create a plane from a point and two more vectors, panicking when they
    /// do not define one.
    ///
    /// With [`PlaneMethod::ThreePoints`] `a` and `b` are the coordinates of two
    /// further points on the plane.
    pub fn new(point: Point3<f64>, a: Vector3<f64>, b: Vector3<f64>, method: PlaneMethod) -> Self {
        match Self::try_new(point, a, b, method) {
            Ok(plane) => plane,
            Err(err) => panic!("invalid plane construction: {err}"),
        }
    }

    /// Checked variant of [`Plane::new`] using the default tolerance
    pub fn try_new(
        point: Point3<f64>,
        a: Vector3<f64>,
        b: Vector3<f64>,
        method: PlaneMethod,
    ) -> Result<Self> {
        Self::try_new_with(point, a, b, method, Tolerance::default())
    }

    /// Checked construction where `tolerance` decides when the spanning
    /// vectors are parallel
    pub fn try_new_with(
        point: Point3<f64>,
        a: Vector3<f64>,
        b: Vector3<f64>,
        method: PlaneMethod,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let (u, v, error) = match method {
            PlaneMethod::PointTwoVectors => (a, b, GeometryError::ParallelVectors),
            PlaneMethod::ThreePoints => (
                a - point.coords,
                b - point.coords,
                GeometryError::CollinearPoints,
            ),
        };

        if u.relation_with(&v, tolerance) == Relation::IdenticalOrMultiple {
            return Err(error);
        }

        u.cross(&v)
            .try_normalize(0.0)
            .map(|normal| Self::from_unit_normal(point, normal))
            .ok_or(error)
    }

    pub fn from_two_vectors(point: Point3<f64>, a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self::new(point, a, b, PlaneMethod::PointTwoVectors)
    }

    /// Normal follows the right-hand rule over `p -> a -> b`
    pub fn from_three_points(p: Point3<f64>, a: Point3<f64>, b: Point3<f64>) -> Self {
        Self::new(p, a.coords, b.coords, PlaneMethod::ThreePoints)
    }

    pub fn from_point_and_normal(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        match Self::try_from_point_and_normal(point, normal) {
            Ok(plane) => plane,
            Err(err) => panic!("invalid plane construction: {err}"),
        }
    }

    pub fn try_from_point_and_normal(point: Point3<f64>, normal: Vector3<f64>) -> Result<Self> {
        normal
            .try_normalize(0.0)
            .map(|unit| Self::from_unit_normal(point, unit))
            .ok_or(GeometryError::ZeroNormal)
    }

    fn from_unit_normal(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            point,
            normal,
            initialized: true,
        }
    }

    pub fn point(&self) -> Point3<f64> {
        self.point
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn flip_normal(&mut self) {
        assert!(self.initialized, "flip_normal called on an uninitialized plane");
        self.normal = -self.normal;
    }

    /// Orient the normal so that `point` lies on its positive side
    pub fn point_normal_towards(&mut self, point: &Point3<f64>) {
        assert!(
            self.initialized,
            "point_normal_towards called on an uninitialized plane"
        );
        if self.signed_distance(point) < 0.0 {
            self.flip_normal();
        }
    }

    /// Distance to `point`, positive on the side the normal points toward
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        intersect::distance(self, point, false)
    }

    /// Foot of the perpendicular dropped from `point`
    pub fn project_point(&self, point: &Point3<f64>) -> Point3<f64> {
        intersect::project_with(self, point, Tolerance::default())
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            point: Point3::origin(),
            normal: Vector3::zeros(),
            initialized: false,
        }
    }
}
