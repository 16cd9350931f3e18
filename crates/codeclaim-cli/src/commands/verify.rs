// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use codeclaim_sdk::artifacts::{load_manifest, load_verifying_key};
use codeclaim_sdk::{read_bundle, verify_bundle, ArtifactPaths, ClaimConfig};
use tracing::debug;

use crate::commands::claim_failure;
use crate::output;

/// Only the manifest and verification key are needed, not the proving key.
pub fn run(config: &ClaimConfig, bundle_path: &Path) -> Result<()> {
    let paths = ArtifactPaths::in_dir(&config.artifacts_dir);
    load_manifest(&paths.manifest).map_err(|e| claim_failure(&e))?;
    let vk = load_verifying_key(&paths.verifying_key).map_err(|e| claim_failure(&e))?;

    let bundle = read_bundle(bundle_path).map_err(|e| claim_failure(&e))?;
    debug!(path = %bundle_path.display(), "bundle read");
    let valid = verify_bundle(&bundle, &vk).map_err(|e| claim_failure(&e))?;

    if output::is_json() {
        output::json_output(&serde_json::json!({
            "valid": valid,
            "commitment": bundle.commitment,
            "nullifierHash": bundle.nullifier_hash,
        }))?;
    } else if valid {
        output::success("proof is valid");
        output::label("commitment", bundle.commitment);
        output::label("nullifier hash", bundle.nullifier_hash);
    }

    if !valid {
        return Err(output::fail_with_hint(
            "proof rejected",
            "the bundle was altered or made with different keys",
        ));
    }
    Ok(())
}
