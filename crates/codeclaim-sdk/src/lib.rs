// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # codeclaim-sdk
//!
//! Proof pipeline for **code claims**: prove knowledge of a secret code and
//! a nullifier behind a public commitment, while publishing a one-use
//! nullifier hash that makes a second claim with the same nullifier
//! visible.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports the pipeline entry points and core types |
//! | [`witness`] | Input reduction, commitment / nullifier hash, circuit witness |
//! | [`engine`] | Groth16 proving over the built-in circuit |
//! | [`verifier`] | Local pairing check, same equation an EVM verifier evaluates |
//! | [`encoder`] | Arkworks → EVM argument encoding (swapped G2 coefficients) |
//! | [`pipeline`] | Staged single run, `OutputBundle`, cancellation |
//! | [`vectors`] | Sequential and concurrent batch generation |
//! | [`artifacts`] | Proving key, snarkjs verification key, circuit manifest |
//! | [`config`] | Environment-backed settings |
//!
//! ## Typical integration flow
//!
//! ```rust,no_run
//! use codeclaim_sdk::{generate_proof, ClaimConfig, PipelineOptions, ProvingArtifacts};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Settings from CODECLAIM_ARTIFACTS / CODECLAIM_REDUCTION
//! let config = ClaimConfig::from_env()?;
//!
//! // 2. Load keys once (validated against the built-in circuit)
//! let artifacts = ProvingArtifacts::load_dir(&config.artifacts_dir)?;
//!
//! // 3. Hash, witness, prove, verify, encode
//! let bundle = generate_proof("123456", "789012", &artifacts, &PipelineOptions::from(&config))?;
//!
//! // 4. Hand `bundle.proof` and `bundle.public_signals` to the verifier contract
//! println!("{}", serde_json::to_string_pretty(&bundle)?);
//! # Ok(())
//! # }
//! ```

// Re-exports from codeclaim-types
pub use codeclaim_types::{
    Commitment, InputError, Nullifier, NullifierHash, ReductionPolicy, SecretCode,
};

// Re-exports from codeclaim-poseidon
pub use codeclaim_poseidon::{commitment, nullifier_hash};

pub mod artifacts;
pub mod config;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod pipeline;
mod points;
pub mod signals;
pub mod vectors;
pub mod verifier;
pub mod vk_json;
pub mod witness;

pub use artifacts::{ArtifactPaths, CircuitManifest, ProvingArtifacts};
pub use config::ClaimConfig;
pub use encoder::OnChainProof;
pub use error::{ClaimError, ClaimResult, Stage, StageError};
pub use pipeline::{
    generate_proof, read_bundle, run_pipeline, verify_bundle, write_bundle, CancelToken,
    OutputBundle, PipelineOptions,
};
pub use signals::PublicSignals;
pub use vectors::{default_pairs, generate_concurrent, write_vectors};
pub use witness::{ReducedPair, WitnessInput};

/// Sequential batch over `pairs`, in input order.
pub fn generate_test_vectors(
    pairs: &[vectors::ClaimPair],
    artifacts: &ProvingArtifacts,
    options: &PipelineOptions,
) -> Result<Vec<OutputBundle>, StageError> {
    vectors::generate(pairs, artifacts, options)
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::OnceLock;

    use ark_std::rand::{rngs::StdRng, SeedableRng};

    use crate::{Nullifier, ProvingArtifacts, ReducedPair, ReductionPolicy, SecretCode, WitnessInput};

    /// Development keys shared by every unit test in the crate.
    pub fn dev_artifacts() -> &'static ProvingArtifacts {
        static KEYS: OnceLock<ProvingArtifacts> = OnceLock::new();
        KEYS.get_or_init(|| {
            ProvingArtifacts::generate_dev(&mut StdRng::seed_from_u64(42)).expect("dev setup")
        })
    }

    /// secret 123456, nullifier 789012
    pub fn scenario_a_witness() -> WitnessInput {
        let pair = ReducedPair::new(
            &SecretCode::from(123456),
            &Nullifier::from(789012),
            ReductionPolicy::Reduce,
        )
        .expect("small inputs reduce");
        WitnessInput::build(pair.secret, pair.nullifier, &pair.commitment(), &pair.nullifier_hash())
    }
}
