// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Construction errors for lines and planes

use thiserror::Error;

/// Arguments that do not determine a unique line or plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("direction vector has zero length")]
    ZeroDirection,

    #[error("normal vector has zero length")]
    ZeroNormal,

    #[error("points coincide and do not define a direction")]
    CoincidentPoints,

    #[error("point lies on the line and does not define a plane")]
    PointOnLine,

    #[error("spanning vectors are parallel")]
    ParallelVectors,

    #[error("points are collinear")]
    CollinearPoints,

    #[error("{0} is not initialized")]
    Uninitialized(&'static str),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
