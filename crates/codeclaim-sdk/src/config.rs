// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Runtime configuration: environment first, then explicit overrides.

use std::path::PathBuf;

use codeclaim_types::ReductionPolicy;

use crate::error::ClaimResult;

pub const ENV_ARTIFACTS: &str = "CODECLAIM_ARTIFACTS";
pub const ENV_REDUCTION: &str = "CODECLAIM_REDUCTION";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimConfig {
    pub artifacts_dir: PathBuf,
    pub reduction: ReductionPolicy,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            reduction: ReductionPolicy::default(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl ClaimConfig {
    pub fn from_env() -> ClaimResult<Self> {
        Self::from_lookup(env_var)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClaimResult<Self> {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_ARTIFACTS) {
            config.artifacts_dir = PathBuf::from(dir);
        }
        if let Some(policy) = lookup(ENV_REDUCTION) {
            config.reduction = policy.parse()?;
        }
        Ok(config)
    }

    pub fn with_artifacts_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.artifacts_dir = dir;
        }
        self
    }

    pub fn with_reduction(mut self, policy: Option<ReductionPolicy>) -> Self {
        if let Some(policy) = policy {
            self.reduction = policy;
        }
        self
    }
}
