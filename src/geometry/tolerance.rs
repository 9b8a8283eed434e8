// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tolerance used for zero comparisons in classification
//!
//! The tolerance is compared against raw dot and cross product magnitudes,
//! without normalizing the inputs first. Classification of very long or very
//! short vectors is therefore scale dependent.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Default tolerance shared by every classification
pub const EPSILON: f64 = 1e-6;

/// Tolerance for zero comparisons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub epsilon: f64,
}

impl Tolerance {
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// A usable tolerance is finite and strictly positive
    pub fn is_valid(self) -> bool {
        self.epsilon.is_finite() && self.epsilon > 0.0
    }

    /// Check if a scalar is zero within tolerance
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.epsilon
    }

    /// Check if a vector has (near) zero length
    pub fn is_zero_vector(self, v: &Vector3<f64>) -> bool {
        v.norm() <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}
