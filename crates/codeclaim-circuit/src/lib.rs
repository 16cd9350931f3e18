// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The code-claim circuit over BN254.
//!
//! Two public inputs (see [`layout`]) and two private witnesses:
//!
//! ```text
//! public  C, N
//! private s, n
//! Poseidon(s, n) == C
//! Poseidon(n)    == N
//! ```

pub mod claim;
pub mod layout;
pub mod poseidon_gadget;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};

pub use claim::CodeClaimCircuit;
pub use layout::{
    layout_matches, ClaimSignals, CIRCUIT_ID, CIRCUIT_VERSION, CODE_CLAIM_LAYOUT, NUM_PUBLIC_SIGNALS,
};

/// Single-party Groth16 setup for the code-claim circuit.
///
/// Development keys only: whoever runs this knows the toxic waste.
pub fn setup<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(ProvingKey<Bn254>, VerifyingKey<Bn254>), SynthesisError> {
    Groth16::<Bn254>::circuit_specific_setup(CodeClaimCircuit::empty(), rng)
}

/// Synthesize `circuit` and report whether every constraint holds.
pub fn is_satisfied(circuit: CodeClaimCircuit) -> Result<bool, SynthesisError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    circuit.generate_constraints(cs.clone())?;
    cs.is_satisfied()
}

/// Count constraints in the code-claim circuit
pub fn constraint_count() -> Result<usize, SynthesisError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(ark_relations::r1cs::OptimizationGoal::Constraints);
    cs.set_mode(ark_relations::r1cs::SynthesisMode::Setup);
    CodeClaimCircuit::empty().generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}
