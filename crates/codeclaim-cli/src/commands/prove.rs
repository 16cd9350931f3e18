// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use codeclaim_sdk::{generate_proof, write_bundle, ClaimConfig, PipelineOptions};

use crate::commands::{claim_failure, load_artifacts, stage_failure, until_interrupted};
use crate::output;

fn default_out() -> Result<PathBuf> {
    let ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    Ok(PathBuf::from(format!("proof_{ms}.json")))
}

pub async fn run(
    config: &ClaimConfig,
    secret: String,
    nullifier: String,
    out: Option<PathBuf>,
) -> Result<()> {
    let artifacts = load_artifacts(config)?;
    let options = PipelineOptions::from(config);
    let cancel = options.cancel.clone();

    let pb = output::spinner("generating proof (this may take a few seconds)...");
    let work = tokio::task::spawn_blocking(move || {
        generate_proof(&secret, &nullifier, &artifacts, &options)
    });
    let joined = until_interrupted(work, &cancel).await;
    pb.finish_and_clear();
    let bundle = joined
        .context("prover thread failed")?
        .map_err(|e| stage_failure(&e))?;

    let path = match out {
        Some(path) => path,
        None => default_out()?,
    };
    write_bundle(&path, &bundle).map_err(|e| claim_failure(&e))?;

    if output::is_json() {
        output::json_output(&bundle)?;
    } else {
        output::success("proof generated and verified");
        output::label("commitment", bundle.commitment);
        output::label("nullifier hash", bundle.nullifier_hash);
        output::label("proof", serde_json::to_string(&bundle.proof)?);
        output::label("saved", path.display());
    }
    Ok(())
}
