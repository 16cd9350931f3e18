// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for the claim pipeline.
//!
//! Every variant is fatal for the run that raised it. None of them is
//! transient: rerunning with the same inputs and artifacts fails the same way.

use std::fmt;
use std::path::PathBuf;

use ark_relations::r1cs::SynthesisError;
use codeclaim_types::InputError;

#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("artifact not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("artifact {} is invalid: {reason}", path.display())]
    ArtifactInvalid { path: PathBuf, reason: String },

    #[error("witness does not satisfy the circuit: {0}")]
    ConstraintUnsatisfied(String),

    #[error("proof failed local verification")]
    ProofVerificationFailed,

    #[error("malformed proof encoding: {0}")]
    MalformedProof(String),

    #[error("cancelled before the proof was verified")]
    Cancelled,

    #[error("OS randomness unavailable: {0}")]
    Entropy(#[from] ark_std::rand::Error),

    #[error("constraint synthesis: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ClaimResult<T> = Result<T, ClaimError>;

/// Pipeline position, `Input → Hashed → Witnessed → Proved → Verified → Encoded → Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Input,
    Hashed,
    Witnessed,
    Proved,
    Verified,
    Encoded,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Input => "input",
            Stage::Hashed => "hash",
            Stage::Witnessed => "witness",
            Stage::Proved => "prove",
            Stage::Verified => "verify",
            Stage::Encoded => "encode",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// `Failed(stage, error)`: the stage that was being entered when `error` occurred.
#[derive(Debug, thiserror::Error)]
#[error("{stage} stage failed: {error}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub error: ClaimError,
}

impl StageError {
    pub fn new(stage: Stage, error: impl Into<ClaimError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}

pub(crate) trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, StageError>;
}

impl<T, E: Into<ClaimError>> AtStage<T> for Result<T, E> {
    fn at(self, stage: Stage) -> Result<T, StageError> {
        self.map_err(|e| StageError::new(stage, e))
    }
}
