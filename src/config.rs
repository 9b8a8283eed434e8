// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel configuration
//!
//! Defaults, then `geokernel.toml`, then the `GEOKERNEL_EPSILON` environment
//! variable.

use crate::geometry::Tolerance;
use anyhow::{bail, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "geokernel.toml";

/// Environment variable overriding the tolerance
pub const EPSILON_ENV: &str = "GEOKERNEL_EPSILON";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub tolerance: Tolerance,
}

impl KernelConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: KernelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if !config.tolerance.is_valid() {
            bail!(
                "Invalid tolerance {} in {:?}: must be finite and positive",
                config.tolerance.epsilon,
                path
            );
        }

        debug!("loaded kernel config from {:?}", path);
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        Self::load_from(
            Path::new(DEFAULT_CONFIG_FILE),
            std::env::var(EPSILON_ENV).ok(),
        )
    }

    /// Read `path` if it exists, then apply an optional epsilon override
    pub fn load_from(path: &Path, epsilon_override: Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        if let Some(raw) = epsilon_override {
            config.apply_epsilon_override(&raw);
        }

        Ok(config)
    }

    /// Apply a textual epsilon; unusable values are logged and ignored
    pub fn apply_epsilon_override(&mut self, raw: &str) {
        match raw.trim().parse::<f64>() {
            Ok(epsilon) if Tolerance::new(epsilon).is_valid() => {
                self.tolerance = Tolerance::new(epsilon);
            }
            _ => warn!("ignoring invalid {} value {:?}", EPSILON_ENV, raw),
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
