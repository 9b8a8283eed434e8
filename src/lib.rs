// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geokernel
//!
//! Closed-form line and plane primitives for collision, contact and spatial
//! queries. Provides relation classification, plane/line and plane/plane
//! intersection, and point-to-plane distance.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod query;
pub mod utils;

pub use config::KernelConfig;
pub use error::GeometryError;
pub use geometry::{
    distance, intersect, relation, Intersect, Line, LineMethod, Plane, PlaneMethod, Relate,
    Relation, Tolerance, EPSILON,
};
pub use kernel::Kernel;
pub use query::{Answer, Query, QueryBatch};
pub use utils::elem_wise_division;

/// Evaluate a JSON document holding one query or an array of queries
pub fn evaluate_json(source: &str, kernel: &Kernel) -> anyhow::Result<Vec<Answer>> {
    let batch: QueryBatch = serde_json::from_str(source)?;
    batch
        .into_queries()
        .into_iter()
        .map(|query| kernel.evaluate(&query).map_err(anyhow::Error::from))
        .collect()
}
