// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier, written as the same pairing product an EVM verifier
//! contract evaluates through the bn128 precompiles.

use ark_bn254::{Bn254, G1Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use ark_groth16::{Proof, VerifyingKey};

use crate::error::{ClaimError, ClaimResult};
use crate::signals::PublicSignals;

/// Verify a Groth16 proof using the BN254 pairing check
///
/// Algorithm:
/// 1. Compute vk_x = IC[0] + Σ signal[i] · IC[i+1]
/// 2. Check: e(-A,B) * e(alpha,beta) * e(vk_x,gamma) * e(C,delta) == 1
///
/// A signal count that does not match the key is an error, not `false`:
/// the verifier contract reverts on it.
pub fn verify(
    proof: &Proof<Bn254>,
    signals: &PublicSignals,
    vk: &VerifyingKey<Bn254>,
) -> ClaimResult<bool> {
    if signals.len() + 1 != vk.gamma_abc_g1.len() {
        return Err(ClaimError::MalformedProof(format!(
            "{} public signals, verification key expects {}",
            signals.len(),
            vk.gamma_abc_g1.len().saturating_sub(1)
        )));
    }

    // Step 1: vk_x
    let mut vk_x: G1Projective = vk.gamma_abc_g1[0].into_group();
    for (signal, ic) in signals.as_slice().iter().zip(&vk.gamma_abc_g1[1..]) {
        vk_x += *ic * signal;
    }

    // Step 2: pairing product
    let product = Bn254::multi_pairing(
        [-proof.a, vk.alpha_g1, vk_x.into_affine(), proof.c],
        [proof.b, vk.beta_g2, vk.gamma_g2, vk.delta_g2],
    );
    Ok(product.0.is_one())
}
