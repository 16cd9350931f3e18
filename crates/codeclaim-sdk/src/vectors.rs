// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Batch proof generation for reference test vectors.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use codeclaim_types::{Nullifier, SecretCode};
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use crate::artifacts::ProvingArtifacts;
use crate::error::{AtStage, ClaimError, ClaimResult, Stage, StageError};
use crate::pipeline::{crypto_rng, run_pipeline, OutputBundle, PipelineOptions};

pub type ClaimPair = (SecretCode, Nullifier);

const LARGE_SECRET: &str = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
const LARGE_NULLIFIER: &str = "0xfedcba0987654321fedcba0987654321fedcba0987654321fedcba0987654321";

/// The reference fixtures: a small decimal pair, then a 256-bit pair whose
/// nullifier lies above the field modulus.
pub fn default_pairs() -> Vec<ClaimPair> {
    vec![
        (SecretCode::from(123456), Nullifier::from(789012)),
        (
            LARGE_SECRET.parse().expect("fixture secret is valid hex"),
            LARGE_NULLIFIER.parse().expect("fixture nullifier is valid hex"),
        ),
    ]
}

/// Prove every pair in order, stopping at the first failure.
pub fn generate(
    pairs: &[ClaimPair],
    artifacts: &ProvingArtifacts,
    options: &PipelineOptions,
) -> Result<Vec<OutputBundle>, StageError> {
    let mut rng = crypto_rng().at(Stage::Proved)?;
    pairs
        .iter()
        .enumerate()
        .map(|(index, (secret, nullifier))| {
            debug!(index, "test vector");
            run_pipeline(secret, nullifier, artifacts, options, &mut rng)
        })
        .collect()
}

fn join_failure(err: JoinError) -> StageError {
    if err.is_panic() {
        std::panic::resume_unwind(err.into_panic());
    }
    StageError::new(Stage::Proved, ClaimError::Cancelled)
}

/// Prove `pairs` on the blocking pool, at most `jobs` at a time.
///
/// Bundles come back in input order. The first failure trips
/// `options.cancel`, so runs that have not verified yet stop and the
/// original error is returned.
pub async fn generate_concurrent(
    artifacts: Arc<ProvingArtifacts>,
    pairs: Vec<ClaimPair>,
    jobs: usize,
    options: PipelineOptions,
) -> Result<Vec<OutputBundle>, StageError> {
    let total = pairs.len();
    let permits = Arc::new(Semaphore::new(jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, (secret, nullifier)) in pairs.into_iter().enumerate() {
        let permits = Arc::clone(&permits);
        let artifacts = Arc::clone(&artifacts);
        let options = options.clone();
        tasks.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return (index, Err(StageError::new(Stage::Proved, ClaimError::Cancelled)));
            };
            let run = tokio::task::spawn_blocking(move || {
                let mut rng = crypto_rng().at(Stage::Proved)?;
                run_pipeline(&secret, &nullifier, &artifacts, &options, &mut rng)
            })
            .await;
            (index, run.unwrap_or_else(|e| Err(join_failure(e))))
        });
    }

    let mut slots: Vec<Option<OutputBundle>> = vec![None; total];
    let mut first_error: Option<StageError> = None;

    while let Some(joined) = tasks.join_next().await {
        let (index, result) = match joined {
            Ok(done) => done,
            Err(e) => {
                first_error.get_or_insert(join_failure(e));
                options.cancel.cancel();
                continue;
            }
        };
        match result {
            Ok(bundle) => slots[index] = Some(bundle),
            Err(err) => {
                if first_error.is_none() {
                    warn!(index, stage = %err.stage, "test vector failed, cancelling batch");
                    options.cancel.cancel();
                    first_error = Some(err);
                }
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }
    info!(count = total, "test vectors generated");
    Ok(slots.into_iter().flatten().collect())
}

/// Save bundles as one ordered JSON array.
pub fn write_vectors(path: &Path, bundles: &[OutputBundle]) -> ClaimResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(bundles)?)?;
    info!(path = %path.display(), count = bundles.len(), "test vectors saved");
    Ok(())
}
