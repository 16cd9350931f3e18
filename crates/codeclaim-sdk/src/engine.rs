// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 proving over the code-claim circuit.

use std::time::Instant;

use ark_bn254::Bn254;
use ark_groth16::{Groth16, Proof};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::artifacts::ProvingArtifacts;
use crate::error::{ClaimError, ClaimResult};
use crate::signals::PublicSignals;
use crate::witness::WitnessInput;

/// Prove `witness` with the loaded proving key.
///
/// The assignment is checked against the constraint system first, since the
/// Groth16 prover itself will happily emit a proof for an unsatisfied
/// system. Blinding is drawn from `rng`, so repeated calls return different
/// proof bytes for the same public signals.
pub fn prove<R: RngCore + CryptoRng>(
    witness: &WitnessInput,
    artifacts: &ProvingArtifacts,
    rng: &mut R,
) -> ClaimResult<(Proof<Bn254>, PublicSignals)> {
    let circuit = witness.to_circuit()?;

    let broken = circuit.broken_relations();
    if !broken.is_empty() {
        return Err(ClaimError::ConstraintUnsatisfied(broken.join(", ")));
    }
    if !codeclaim_circuit::is_satisfied(circuit.clone())? {
        return Err(ClaimError::ConstraintUnsatisfied(
            "constraint system rejected the assignment".into(),
        ));
    }
    let signals = circuit
        .public_signals()
        .ok_or_else(|| ClaimError::ConstraintUnsatisfied("public slots missing".into()))?;

    let start = Instant::now();
    let proof = Groth16::<Bn254>::prove(&artifacts.proving_key, circuit, rng)?;
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "groth16 proof generated");

    Ok((proof, signals.into()))
}
