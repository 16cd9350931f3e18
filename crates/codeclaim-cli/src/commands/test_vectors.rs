// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use codeclaim_sdk::{default_pairs, generate_concurrent, write_vectors, ClaimConfig, PipelineOptions};

use crate::commands::{claim_failure, load_artifacts, stage_failure, until_interrupted};
use crate::output;

pub async fn run(config: &ClaimConfig, out: Option<PathBuf>, jobs: usize) -> Result<()> {
    let artifacts = Arc::new(load_artifacts(config)?);
    let options = PipelineOptions::from(config);
    let cancel = options.cancel.clone();
    let pairs = default_pairs();

    let pb = output::spinner(&format!("proving {} test vectors...", pairs.len()));
    let result = until_interrupted(generate_concurrent(artifacts, pairs, jobs, options), &cancel).await;
    pb.finish_and_clear();
    let bundles = result.map_err(|e| stage_failure(&e))?;

    let path = out.unwrap_or_else(|| config.artifacts_dir.join("vectors").join("test_vectors.json"));
    write_vectors(&path, &bundles).map_err(|e| claim_failure(&e))?;

    if output::is_json() {
        output::json_output(&bundles)?;
    } else {
        output::success(&format!("{} test vectors generated", bundles.len()));
        for (i, bundle) in bundles.iter().enumerate() {
            output::label(&format!("[{i}] commitment"), bundle.commitment);
            output::label(&format!("[{i}] nullifier hash"), bundle.nullifier_hash);
        }
        output::label("saved", path.display());
    }
    Ok(())
}
