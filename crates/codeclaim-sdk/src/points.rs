// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve point construction from decimal coordinates, with the on-curve and
//! subgroup checks the EVM precompiles would otherwise reject us on.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use codeclaim_types::decimal_to_field;

pub(crate) fn fq(s: &str) -> Result<Fq, String> {
    decimal_to_field::<Fq>(s).map_err(|e| format!("coordinate {s:?}: {e}"))
}

/// `(0, 0)` is the EVM encoding of the point at infinity.
pub(crate) fn g1_from_xy(x: &str, y: &str) -> Result<G1Affine, String> {
    let (x, y) = (fq(x)?, fq(y)?);
    if x == Fq::from(0u64) && y == Fq::from(0u64) {
        return Ok(G1Affine::identity());
    }
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() {
        return Err("G1 point is not on the curve".into());
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err("G1 point is not in the prime-order subgroup".into());
    }
    Ok(p)
}

pub(crate) fn g2_from_coeffs(x: Fq2, y: Fq2) -> Result<G2Affine, String> {
    if x == Fq2::from(0u64) && y == Fq2::from(0u64) {
        return Ok(G2Affine::identity());
    }
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() {
        return Err("G2 point is not on the curve".into());
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err("G2 point is not in the prime-order subgroup".into());
    }
    Ok(p)
}

/// `[[c0, c1], ...]` order: real coefficient first.
pub(crate) fn fq2(c0: &str, c1: &str) -> Result<Fq2, String> {
    Ok(Fq2::new(fq(c0)?, fq(c1)?))
}
