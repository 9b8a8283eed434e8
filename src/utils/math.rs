// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Vector3;

/// Component-wise quotient `a / b`.
///
/// Zero divisors follow IEEE semantics and produce infinities or NaN.
pub fn elem_wise_division(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(a.x / b.x, a.y / b.y, a.z / b.z)
}
