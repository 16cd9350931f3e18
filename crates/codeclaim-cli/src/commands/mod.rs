// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod prove;
pub mod setup;
pub mod test_vectors;
pub mod verify;

use std::future::Future;

use anyhow::Result;
use codeclaim_sdk::{CancelToken, ClaimConfig, ClaimError, ProvingArtifacts, StageError};
use tracing::debug;

use crate::output;

fn hint(err: &ClaimError) -> &'static str {
    match err {
        ClaimError::InvalidInput(_) => {
            "values are decimal or 0x-prefixed hex; --reduction reduce accepts values above the field modulus"
        }
        ClaimError::ArtifactNotFound { .. } => "run `codeclaim setup` or point --artifacts at an existing directory",
        ClaimError::ArtifactInvalid { .. } => {
            "the artifacts were built for a different circuit; rerun `codeclaim setup --force`"
        }
        ClaimError::ProofVerificationFailed => "the proving and verification keys do not belong together",
        ClaimError::Cancelled => "interrupted before the proof was verified; nothing was written",
        _ => "rerun with -vv for details",
    }
}

pub fn claim_failure(err: &ClaimError) -> anyhow::Error {
    output::fail_with_hint(&err.to_string(), hint(err))
}

pub fn stage_failure(err: &StageError) -> anyhow::Error {
    output::fail_with_hint(&err.to_string(), hint(&err.error))
}

pub fn load_artifacts(config: &ClaimConfig) -> Result<ProvingArtifacts> {
    debug!(dir = %config.artifacts_dir.display(), "loading artifacts");
    let pb = output::spinner("loading proving key...");
    let loaded = ProvingArtifacts::load_dir(&config.artifacts_dir);
    pb.finish_and_clear();
    loaded.map_err(|e| claim_failure(&e))
}

/// Drive `work` to completion, tripping `cancel` on Ctrl-C. The work still
/// runs to its next cancellation check and reports `Cancelled` itself.
pub async fn until_interrupted<F: Future>(work: F, cancel: &CancelToken) -> F::Output {
    tokio::pin!(work);
    tokio::select! {
        out = &mut work => out,
        _ = tokio::signal::ctrl_c() => {
            output::warn("interrupt received, stopping");
            cancel.cancel();
            work.await
        }
    }
}
