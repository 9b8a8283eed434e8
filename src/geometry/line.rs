// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Infinite line through a point along a unit direction

use super::tolerance::Tolerance;
use crate::error::{GeometryError, Result};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// How the second constructor argument of a line is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMethod {
    /// Second argument is the direction
    #[default]
    PointVector,
    /// Second argument is the position of another point on the line
    PointPoint,
}

/// Infinite line represented by a point and a unit direction
///
/// A default line is uninitialized: zero point, zero direction. Only
/// construction produces an initialized line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    point: Point3<f64>,
    direction: Vector3<f64>,
    initialized: bool,
}

impl Line {
    /// Create a line, panicking when the arguments do not define one.
    ///
    /// With [`LineMethod::PointPoint`] the `vector` argument holds the
    /// coordinates of a second point, which must differ from `point`.
    pub fn new(point: Point3<f64>, vector: Vector3<f64>, method: LineMethod) -> Self {
        match Self::try_new(point, vector, method) {
            Ok(line) => line,
            Err(err) => panic!("invalid line construction: {err}"),
        }
    }

    /// Checked variant of [`Line::new`] using the default tolerance
    pub fn try_new(point: Point3<f64>, vector: Vector3<f64>, method: LineMethod) -> Result<Self> {
        Self::try_new_with(point, vector, method, Tolerance::default())
    }

    /// Checked construction where `tolerance` decides when two points coincide.
    ///
    /// A direction vector only has to be normalizable, however short.
    pub fn try_new_with(
        point: Point3<f64>,
        vector: Vector3<f64>,
        method: LineMethod,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let (direction, error) = match method {
            LineMethod::PointVector => (vector, GeometryError::ZeroDirection),
            LineMethod::PointPoint => {
                let direction = vector - point.coords;
                if tolerance.is_zero_vector(&direction) {
                    return Err(GeometryError::CoincidentPoints);
                }
                (direction, GeometryError::CoincidentPoints)
            }
        };

        direction
            .try_normalize(0.0)
            .map(|unit| Self::from_normalized(point, unit))
            .ok_or(error)
    }

    pub fn from_point_vector(point: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self::new(point, direction, LineMethod::PointVector)
    }

    pub fn from_two_points(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self::new(a, b.coords, LineMethod::PointPoint)
    }

    /// Caller guarantees `direction` has unit length
    pub(crate) fn from_normalized(point: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            point,
            direction,
            initialized: true,
        }
    }

    pub fn point(&self) -> Point3<f64> {
        self.point
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.direction
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Point at signed distance `r` from the line's point along its direction
    pub fn point_on_line(&self, r: f64) -> Point3<f64> {
        assert!(self.initialized, "point_on_line called on an uninitialized line");
        self.point + self.direction * r
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            point: Point3::origin(),
            direction: Vector3::zeros(),
            initialized: false,
        }
    }
}
