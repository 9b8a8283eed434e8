// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pairwise classification of vectors, points, lines and planes
//!
//! Every classification reduces to one decision over a dot and a cross
//! product, compared against a fixed [`Tolerance`].

use super::line::Line;
use super::plane::Plane;
use super::tolerance::Tolerance;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometric relationship between two quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Parallel or anti-parallel vectors, coincident lines or planes
    IdenticalOrMultiple,
    Orthogonal,
    /// Neither parallel nor orthogonal; for lines, not intersecting
    Skew,
    Parallel,
    Intersect,
    /// Point on a line or plane, or line lying in a plane
    Containing,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::IdenticalOrMultiple => "identical or multiple",
            Relation::Orthogonal => "orthogonal",
            Relation::Skew => "skew",
            Relation::Parallel => "parallel",
            Relation::Intersect => "intersect",
            Relation::Containing => "containing",
        };
        f.write_str(name)
    }
}

/// Classify the relationship between `Self` and `Rhs`
pub trait Relate<Rhs: ?Sized = Self> {
    fn relation_with(&self, other: &Rhs, tolerance: Tolerance) -> Relation;

    fn relation(&self, other: &Rhs) -> Relation {
        self.relation_with(other, Tolerance::default())
    }
}

/// Classify two quantities with the default tolerance
pub fn relation<A, B>(a: &A, b: &B) -> Relation
where
    A: Relate<B>,
{
    a.relation(b)
}

impl Relate for Vector3<f64> {
    /// The test runs on raw magnitudes: the cross product is measured by the
    /// sum of its absolute components, the dot product by its absolute value.
    /// Signed sums would report anti-ordered pairs such as `(y, x)` as
    /// identical and every obtuse pair as orthogonal.
    fn relation_with(&self, other: &Vector3<f64>, tolerance: Tolerance) -> Relation {
        let s = self.dot(other);
        let cross = self.cross(other);
        let c = cross.x.abs() + cross.y.abs() + cross.z.abs();

        if c <= 3.0 * tolerance.epsilon {
            Relation::IdenticalOrMultiple
        } else if s.abs() <= tolerance.epsilon {
            Relation::Orthogonal
        } else {
            Relation::Skew
        }
    }
}

impl Relate for Plane {
    fn relation_with(&self, other: &Plane, tolerance: Tolerance) -> Relation {
        if self.normal().relation_with(&other.normal(), tolerance) == Relation::IdenticalOrMultiple {
            if self.relation_with(&other.point(), tolerance) == Relation::Containing {
                return Relation::IdenticalOrMultiple;
            }
            return Relation::Parallel;
        }
        Relation::Intersect
    }
}

impl Relate<Line> for Plane {
    fn relation_with(&self, line: &Line, tolerance: Tolerance) -> Relation {
        if self.normal().relation_with(&line.direction(), tolerance) == Relation::Orthogonal {
            if self.relation_with(&line.point(), tolerance) == Relation::Containing {
                return Relation::Containing;
            }
            return Relation::Parallel;
        }
        Relation::Intersect
    }
}

impl Relate<Point3<f64>> for Plane {
    fn relation_with(&self, point: &Point3<f64>, tolerance: Tolerance) -> Relation {
        let offset = self.point() - point;

        match self.normal().relation_with(&offset, tolerance) {
            Relation::Orthogonal => Relation::Containing,
            // Offset too short to register a cross product
            Relation::IdenticalOrMultiple if tolerance.is_zero(self.normal().dot(&offset)) => {
                Relation::Containing
            }
            _ => Relation::Skew,
        }
    }
}

impl Relate for Line {
    /// Non-parallel lines only count as intersecting when `other`'s point
    /// lies on `self`; general 3D intersection is not detected.
    fn relation_with(&self, other: &Line, tolerance: Tolerance) -> Relation {
        let on_self = self.relation_with(&other.point(), tolerance) == Relation::Containing;

        if self.direction().relation_with(&other.direction(), tolerance)
            == Relation::IdenticalOrMultiple
        {
            return if on_self {
                Relation::IdenticalOrMultiple
            } else {
                Relation::Parallel
            };
        }

        if on_self {
            Relation::Intersect
        } else {
            Relation::Skew
        }
    }
}

impl Relate<Point3<f64>> for Line {
    fn relation_with(&self, point: &Point3<f64>, tolerance: Tolerance) -> Relation {
        let offset = point - self.point();
        match self.direction().relation_with(&offset, tolerance) {
            Relation::IdenticalOrMultiple => Relation::Containing,
            _ => Relation::Skew,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_relations() {
        let x = Vector3::x();
        let y = Vector3::y();

        assert_eq!(relation(&x, &x), Relation::IdenticalOrMultiple);
        assert_eq!(relation(&x, &(-3.0 * x)), Relation::IdenticalOrMultiple);
        assert_eq!(relation(&x, &y), Relation::Orthogonal);
        assert_eq!(relation(&y, &x), Relation::Orthogonal);
        assert_eq!(relation(&x, &Vector3::new(1.0, 1.0, 0.0)), Relation::Skew);
        assert_eq!(relation(&x, &Vector3::new(-1.0, 1.0, 0.0)), Relation::Skew);
    }

    #[test]
    fn test_zero_vector_is_identical_to_anything() {
        assert_eq!(
            relation(&Vector3::zeros(), &Vector3::new(1.0, 2.0, 3.0)),
            Relation::IdenticalOrMultiple
        );
    }

    #[test]
    fn test_tolerance_is_scale_sensitive() {
        let x = Vector3::x();
        let tiny = Vector3::new(0.0, 1e-7, 0.0);
        // Orthogonal in direction, but too short to register a cross product
        assert_eq!(relation(&x, &tiny), Relation::IdenticalOrMultiple);
        assert_eq!(x.relation_with(&tiny, Tolerance::new(1e-9)), Relation::Orthogonal);
    }

    #[test]
    fn test_plane_relations() {
        let ground = Plane::from_point_and_normal(Point3::origin(), Vector3::z());
        let raised = Plane::from_point_and_normal(Point3::new(0.0, 0.0, 2.0), -Vector3::z());
        let same = Plane::from_point_and_normal(Point3::new(4.0, -1.0, 0.0), Vector3::z());
        let wall = Plane::from_point_and_normal(Point3::origin(), Vector3::x());

        assert_eq!(relation(&ground, &same), Relation::IdenticalOrMultiple);
        assert_eq!(relation(&ground, &ground), Relation::IdenticalOrMultiple);
        assert_eq!(relation(&ground, &raised), Relation::Parallel);
        assert_eq!(relation(&ground, &wall), Relation::Intersect);
    }

    #[test]
    fn test_plane_point_relations() {
        let ground = Plane::from_point_and_normal(Point3::new(1.0, 1.0, 0.0), Vector3::z());

        assert_eq!(relation(&ground, &Point3::new(1.0, 1.0, 0.0)), Relation::Containing);
        assert_eq!(relation(&ground, &Point3::new(5.0, 5.0, 0.0)), Relation::Containing);
        assert_eq!(relation(&ground, &Point3::new(5.0, 5.0, 3.0)), Relation::Skew);
        assert_eq!(relation(&ground, &Point3::new(1.0, 1.0, -3.0)), Relation::Skew);
    }

    #[test]
    fn test_plane_line_relations() {
        let ground = Plane::from_point_and_normal(Point3::origin(), Vector3::z());
        let inside = Line::from_point_vector(Point3::new(1.0, 0.0, 0.0), Vector3::y());
        let above = Line::from_point_vector(Point3::new(0.0, 0.0, 1.0), Vector3::y());
        let crossing = Line::from_point_vector(Point3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, -1.0));
        let downward = Line::from_point_vector(Point3::new(0.0, 0.0, 1.0), -Vector3::z());

        assert_eq!(relation(&ground, &inside), Relation::Containing);
        assert_eq!(relation(&ground, &above), Relation::Parallel);
        assert_eq!(relation(&ground, &crossing), Relation::Intersect);
        assert_eq!(relation(&ground, &downward), Relation::Intersect);
    }

    #[test]
    fn test_line_relations() {
        let x_axis = Line::from_point_vector(Point3::origin(), Vector3::x());
        let shifted = Line::from_point_vector(Point3::new(7.0, 0.0, 0.0), -Vector3::x());
        let offset = Line::from_point_vector(Point3::new(0.0, 1.0, 0.0), Vector3::x());
        let through = Line::from_point_vector(Point3::new(3.0, 0.0, 0.0), Vector3::y());
        let skew = Line::from_point_vector(Point3::new(0.0, 0.0, 1.0), Vector3::y());

        assert_eq!(relation(&x_axis, &shifted), Relation::IdenticalOrMultiple);
        assert_eq!(relation(&x_axis, &offset), Relation::Parallel);
        assert_eq!(relation(&x_axis, &through), Relation::Intersect);
        assert_eq!(relation(&x_axis, &skew), Relation::Skew);
    }

    #[test]
    fn test_line_point_relations() {
        let line = Line::from_point_vector(Point3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 1.0, 1.0));

        assert_eq!(relation(&line, &Point3::new(1.0, 1.0, 1.0)), Relation::Containing);
        assert_eq!(relation(&line, &Point3::new(-2.0, -2.0, -2.0)), Relation::Containing);
        assert_eq!(relation(&line, &Point3::new(1.0, 0.0, 1.0)), Relation::Skew);
    }

    #[test]
    fn test_display() {
        assert_eq!(Relation::IdenticalOrMultiple.to_string(), "identical or multiple");
        assert_eq!(Relation::Containing.to_string(), "containing");
    }
}
