// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_r1cs_std::fields::{fp::FpVar, FieldVar};
use ark_relations::r1cs::SynthesisError;
use codeclaim_poseidon::{pair_config, single_config};

/// In-circuit mirror of the native permutation, same round schedule.
fn permute_var(state: &mut [FpVar<Fr>], config: &PoseidonConfig<Fr>) -> Result<(), SynthesisError> {
    let half_full = config.full_rounds / 2;
    let total = config.full_rounds + config.partial_rounds;

    for round in 0..total {
        for (s, c) in state.iter_mut().zip(&config.ark[round]) {
            *s += *c;
        }

        let full = round < half_full || round >= half_full + config.partial_rounds;
        if full {
            for s in state.iter_mut() {
                *s = s.pow_by_constant([config.alpha])?;
            }
        } else {
            state[0] = state[0].pow_by_constant([config.alpha])?;
        }

        let old = state.to_vec();
        for (s, row) in state.iter_mut().zip(&config.mds) {
            let mut acc = FpVar::zero();
            for (m, x) in row.iter().zip(&old) {
                acc += x * *m;
            }
            *s = acc;
        }
    }
    Ok(())
}

fn hash_var(inputs: &[FpVar<Fr>], config: &PoseidonConfig<Fr>) -> Result<FpVar<Fr>, SynthesisError> {
    let mut state = Vec::with_capacity(inputs.len() + 1);
    state.push(FpVar::zero());
    state.extend_from_slice(inputs);
    permute_var(&mut state, config)?;
    Ok(state.swap_remove(0))
}

/// `Poseidon(a, b)` in-circuit, see [`codeclaim_poseidon::hash_pair`].
pub fn hash_pair_var(a: &FpVar<Fr>, b: &FpVar<Fr>) -> Result<FpVar<Fr>, SynthesisError> {
    hash_var(&[a.clone(), b.clone()], pair_config())
}

/// `Poseidon(a)` in-circuit, see [`codeclaim_poseidon::hash_single`].
pub fn hash_single_var(a: &FpVar<Fr>) -> Result<FpVar<Fr>, SynthesisError> {
    hash_var(&[a.clone()], single_config())
}
