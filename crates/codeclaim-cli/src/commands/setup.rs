// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use codeclaim_sdk::pipeline::crypto_rng;
use codeclaim_sdk::{ArtifactPaths, ClaimConfig, ProvingArtifacts};
use tracing::info;

use crate::commands::claim_failure;
use crate::output;

pub fn run(config: &ClaimConfig, force: bool) -> Result<()> {
    let paths = ArtifactPaths::in_dir(&config.artifacts_dir);

    if !force {
        if let Some(existing) = paths.all().into_iter().find(|p| p.exists()) {
            return Err(output::fail_with_hint(
                &format!("artifacts already exist: {}", existing.display()),
                "pass --force to overwrite (proofs made with the old keys stop verifying)",
            ));
        }
    }

    let pb = output::spinner("running development setup...");
    let artifacts = crypto_rng()
        .and_then(|mut rng| ProvingArtifacts::generate_dev(&mut rng))
        .map_err(|e| claim_failure(&e));
    pb.finish_and_clear();
    let artifacts = artifacts?;

    artifacts
        .store(&paths)
        .map_err(|e| claim_failure(&e))?;
    info!(dir = %config.artifacts_dir.display(), "development artifacts written");

    if output::is_json() {
        output::json_output(&serde_json::json!({
            "circuit": artifacts.manifest.circuit,
            "version": artifacts.manifest.version,
            "public_signals": artifacts.manifest.public_signals,
            "proving_key": paths.proving_key,
            "verifying_key": paths.verifying_key,
            "manifest": paths.manifest,
        }))?;
    } else {
        output::success("artifacts generated");
        output::label("proving key", paths.proving_key.display());
        output::label("verifying key", paths.verifying_key.display());
        output::label("manifest", paths.manifest.display());
        output::warn("single-party development setup, not fit for deployment");
    }
    Ok(())
}
