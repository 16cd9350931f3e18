// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! One claim, end to end.
//!
//! `Input → Hashed → Witnessed → Proved → Verified → Encoded → Done`. Each
//! step runs once, in order. A failure stops the run and reports the stage
//! it happened in; nothing is returned or written for a run that did not
//! reach `Done`.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ark_bn254::Bn254;
use ark_groth16::VerifyingKey;
use ark_std::rand::rngs::{OsRng, StdRng};
use ark_std::rand::{CryptoRng, RngCore, SeedableRng};
use codeclaim_types::{Commitment, Nullifier, NullifierHash, ReductionPolicy, SecretCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::artifacts::ProvingArtifacts;
use crate::config::ClaimConfig;
use crate::encoder::{encode, OnChainProof};
use crate::error::{AtStage, ClaimError, ClaimResult, Stage, StageError};
use crate::signals::PublicSignals;
use crate::witness::{ReducedPair, WitnessInput};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> ClaimResult<()> {
        if self.is_cancelled() {
            warn!("claim run cancelled");
            return Err(ClaimError::Cancelled);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct PipelineOptions {
    pub reduction: ReductionPolicy,
    pub cancel: CancelToken,
}

impl PipelineOptions {
    pub fn with_reduction(reduction: ReductionPolicy) -> Self {
        Self {
            reduction,
            ..Self::default()
        }
    }
}

impl From<&ClaimConfig> for PipelineOptions {
    fn from(config: &ClaimConfig) -> Self {
        Self::with_reduction(config.reduction)
    }
}

/// Result of a successful run.
///
/// ```json
/// { "proof": { "a": [..], "b": [[..],[..]], "c": [..] },
///   "commitment": "0x..", "nullifierHash": "0x..", "publicSignals": [..] }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputBundle {
    pub proof: OnChainProof,
    pub commitment: Commitment,
    pub nullifier_hash: NullifierHash,
    pub public_signals: PublicSignals,
}

/// OS-seeded RNG for proof blinding.
pub fn crypto_rng() -> ClaimResult<StdRng> {
    Ok(StdRng::from_rng(OsRng)?)
}

/// Run the pipeline on textual inputs (decimal, or `0x` hex).
pub fn generate_proof(
    secret: &str,
    nullifier: &str,
    artifacts: &ProvingArtifacts,
    options: &PipelineOptions,
) -> Result<OutputBundle, StageError> {
    let secret: SecretCode = secret.parse().at(Stage::Input)?;
    let nullifier: Nullifier = nullifier.parse().at(Stage::Input)?;
    let mut rng = crypto_rng().at(Stage::Proved)?;
    run_pipeline(&secret, &nullifier, artifacts, options, &mut rng)
}

#[instrument(skip_all, fields(reduction = %options.reduction))]
pub fn run_pipeline<R: RngCore + CryptoRng>(
    secret: &SecretCode,
    nullifier: &Nullifier,
    artifacts: &ProvingArtifacts,
    options: &PipelineOptions,
    rng: &mut R,
) -> Result<OutputBundle, StageError> {
    let cancel = &options.cancel;

    let pair = ReducedPair::new(secret, nullifier, options.reduction).at(Stage::Hashed)?;
    let commitment = pair.commitment();
    let nullifier_hash = pair.nullifier_hash();
    info!(%commitment, %nullifier_hash, "hashed");

    let witness = WitnessInput::build(pair.secret, pair.nullifier, &commitment, &nullifier_hash);
    debug!("witness assembled");

    cancel.check().at(Stage::Proved)?;
    let (proof, public_signals) =
        crate::engine::prove(&witness, artifacts, rng).at(Stage::Proved)?;
    drop(witness);
    info!(signals = public_signals.len(), "proved");

    cancel.check().at(Stage::Verified)?;
    let valid = crate::verifier::verify(&proof, &public_signals, &artifacts.verifying_key)
        .at(Stage::Verified)?;
    if !valid {
        return Err(StageError::new(Stage::Verified, ClaimError::ProofVerificationFailed));
    }
    info!("verified");

    cancel.check().at(Stage::Encoded)?;
    let bundle = OutputBundle {
        proof: encode(&proof),
        commitment,
        nullifier_hash,
        public_signals,
    };
    info!(%commitment, "claim done");
    Ok(bundle)
}

/// Re-check a persisted bundle: decode the proof, make sure its signals are
/// the commitment and nullifier hash it advertises, and run the verifier.
pub fn verify_bundle(bundle: &OutputBundle, vk: &VerifyingKey<Bn254>) -> ClaimResult<bool> {
    let proof = bundle.proof.decode()?;
    let claim = bundle.public_signals.claim().ok_or_else(|| {
        ClaimError::MalformedProof(format!(
            "expected 2 public signals, found {}",
            bundle.public_signals.len()
        ))
    })?;
    if claim.commitment != *bundle.commitment.as_fr()
        || claim.nullifier_hash != *bundle.nullifier_hash.as_fr()
    {
        return Ok(false);
    }
    crate::verifier::verify(&proof, &bundle.public_signals, vk)
}

pub fn write_bundle(path: &Path, bundle: &OutputBundle) -> ClaimResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(bundle)?)?;
    debug!(path = %path.display(), "bundle written");
    Ok(())
}

pub fn read_bundle(path: &Path) -> ClaimResult<OutputBundle> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
