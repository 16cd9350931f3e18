// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The public-signal contract of the code-claim circuit.
//!
//! Verifiers consume public signals by position. The order below is what the
//! circuit allocates, what the verification key's `IC` vector is indexed by,
//! and what gets written into the artifact manifest. Bump
//! [`CIRCUIT_VERSION`] whenever it changes.

use ark_bn254::Fr;

pub const CIRCUIT_ID: &str = "code_claim";
pub const CIRCUIT_VERSION: u32 = 1;

/// Signal names in instance order: commitment, then nullifier hash.
pub const CODE_CLAIM_LAYOUT: [&str; 2] = ["C", "N"];

pub const NUM_PUBLIC_SIGNALS: usize = CODE_CLAIM_LAYOUT.len();

/// Public inputs of one claim, addressed by meaning rather than by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimSignals {
    pub commitment: Fr,
    pub nullifier_hash: Fr,
}

impl ClaimSignals {
    pub fn to_vec(&self) -> Vec<Fr> {
        vec![self.commitment, self.nullifier_hash]
    }

    /// Read signals positionally; `None` if the length is wrong.
    pub fn from_slice(signals: &[Fr]) -> Option<Self> {
        match signals {
            [commitment, nullifier_hash] => Some(Self {
                commitment: *commitment,
                nullifier_hash: *nullifier_hash,
            }),
            _ => None,
        }
    }
}

/// True if `names` is exactly the layout this build proves against.
pub fn layout_matches<S: AsRef<str>>(names: &[S]) -> bool {
    names.len() == CODE_CLAIM_LAYOUT.len()
        && names.iter().zip(CODE_CLAIM_LAYOUT).all(|(a, b)| a.as_ref() == b)
}
