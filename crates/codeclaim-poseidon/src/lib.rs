// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Poseidon exactly as circomlib's `Poseidon(n)` template computes it.
//!
//! Parameters (BN254 scalar field, x^5 S-box, 8 full rounds, 56 / 57 partial
//! rounds for width 2 / 3) come from `light-poseidon`'s circomlib tables and
//! are never regenerated here. The state starts as `[0, inputs..]` and the
//! digest is `state[0]` after the permutation.
//!
//! Each width is materialised once into a process-wide [`PoseidonConfig`]
//! and shared by every native hash and by the in-circuit gadget.

use std::sync::OnceLock;

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_ff::{Field, Zero};
use codeclaim_types::{Commitment, InputError, Nullifier, NullifierHash, ReductionPolicy, SecretCode};
use light_poseidon::parameters::bn254_x5::get_poseidon_parameters;

static WIDTH_2: OnceLock<PoseidonConfig<Fr>> = OnceLock::new();
static WIDTH_3: OnceLock<PoseidonConfig<Fr>> = OnceLock::new();

/// Shared width-3 parameters, `Poseidon(a, b)`.
pub fn pair_config() -> &'static PoseidonConfig<Fr> {
    WIDTH_3.get_or_init(|| load_config(3))
}

/// Shared width-2 parameters, `Poseidon(a)`.
pub fn single_config() -> &'static PoseidonConfig<Fr> {
    WIDTH_2.get_or_init(|| load_config(2))
}

fn load_config(width: u8) -> PoseidonConfig<Fr> {
    let params = get_poseidon_parameters::<Fr>(width)
        .unwrap_or_else(|e| panic!("circomlib tables cover width {width}: {e}"));
    let ark = params.ark.chunks(params.width).map(<[Fr]>::to_vec).collect();
    PoseidonConfig::new(
        params.full_rounds,
        params.partial_rounds,
        params.alpha,
        params.mds,
        ark,
        params.width - 1,
        1,
    )
}

/// In-place permutation. `state.len()` must equal the config width.
fn permute(state: &mut [Fr], config: &PoseidonConfig<Fr>) {
    let width = config.rate + config.capacity;
    debug_assert_eq!(state.len(), width);

    let half_full = config.full_rounds / 2;
    let total = config.full_rounds + config.partial_rounds;

    for round in 0..total {
        for (s, c) in state.iter_mut().zip(&config.ark[round]) {
            *s += c;
        }

        let full = round < half_full || round >= half_full + config.partial_rounds;
        if full {
            for s in state.iter_mut() {
                *s = s.pow([config.alpha]);
            }
        } else {
            state[0] = state[0].pow([config.alpha]);
        }

        let old = state.to_vec();
        for (s, row) in state.iter_mut().zip(&config.mds) {
            *s = row.iter().zip(&old).map(|(m, x)| *m * x).sum();
        }
    }
}

fn hash_with(inputs: &[Fr], config: &PoseidonConfig<Fr>) -> Fr {
    let mut state = Vec::with_capacity(inputs.len() + 1);
    state.push(Fr::zero());
    state.extend_from_slice(inputs);
    permute(&mut state, config);
    state[0]
}

/// `Poseidon(a, b)` over field elements.
pub fn hash_pair(a: Fr, b: Fr) -> Fr {
    hash_with(&[a, b], pair_config())
}

/// `Poseidon(a)` over a field element.
pub fn hash_single(a: Fr) -> Fr {
    hash_with(&[a], single_config())
}

/// Commitment for a claim pair, reducing both inputs under `policy`.
pub fn commitment(
    secret: &SecretCode,
    nullifier: &Nullifier,
    policy: ReductionPolicy,
) -> Result<Commitment, InputError> {
    let s = secret.to_field(policy)?;
    let n = nullifier.to_field(policy)?;
    Ok(Commitment(hash_pair(s, n)))
}

pub fn nullifier_hash(nullifier: &Nullifier, policy: ReductionPolicy) -> Result<NullifierHash, InputError> {
    Ok(NullifierHash(hash_single(nullifier.to_field(policy)?)))
}
