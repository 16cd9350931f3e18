// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Field element ↔ string conversions.
//!
//! - decimal: canonical base-10 of the reduced value, as snarkjs writes
//!   field elements and curve coordinates.
//! - hex32: `0x` + 64 lowercase hex digits, big-endian, zero-padded. Used
//!   for values that end up as EVM `bytes32`/`uint256` words.
//!
//! Both parsers reject values at or above the field modulus instead of
//! reducing them; a non-canonical encoding is always a bug upstream.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::input::InputError;

pub fn field_to_decimal<F: PrimeField>(f: &F) -> String {
    let v: BigUint = (*f).into();
    v.to_string()
}

pub fn decimal_to_field<F: PrimeField>(s: &str) -> Result<F, InputError> {
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::Malformed(s.to_string()));
    }
    let v = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| InputError::Malformed(s.to_string()))?;
    canonical(v)
}

pub fn field_to_hex32(f: &Fr) -> String {
    format!("0x{}", hex::encode(f.into_bigint().to_bytes_be()))
}

pub fn hex32_to_field(s: &str) -> Result<Fr, InputError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| InputError::Malformed(s.to_string()))?;
    if digits.len() != 64 {
        return Err(InputError::Malformed(s.to_string()));
    }
    let bytes = hex::decode(digits).map_err(|_| InputError::Malformed(s.to_string()))?;
    canonical(BigUint::from_bytes_be(&bytes))
}

fn canonical<F: PrimeField>(v: BigUint) -> Result<F, InputError> {
    let modulus: BigUint = F::MODULUS.into();
    if v >= modulus {
        return Err(InputError::OutOfField { bits: v.bits() });
    }
    Ok(F::from(v))
}
