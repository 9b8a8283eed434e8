// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - lines, planes and their relations

pub mod intersect;
mod line;
mod plane;
mod relation;
mod tolerance;

pub use intersect::{distance, distance_with, intersect, Intersect};
pub use line::{Line, LineMethod};
pub use plane::{Plane, PlaneMethod};
pub use relation::{relation, Relate, Relation};
pub use tolerance::{Tolerance, EPSILON};
