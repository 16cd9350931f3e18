// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared value types for the codeclaim pipeline.
//!
//! Claim inputs ([`SecretCode`], [`Nullifier`]) are arbitrary-precision
//! unsigned integers; they only become BN254 scalar field elements through
//! [`ReductionPolicy::to_field`]. The derived public values
//! ([`Commitment`], [`NullifierHash`]) are field elements rendered as
//! 32-byte hex.

pub mod encoding;
pub mod hashes;
pub mod input;

pub use ark_bn254::Fr;
pub use encoding::{decimal_to_field, field_to_decimal, field_to_hex32, hex32_to_field};
pub use hashes::{Commitment, NullifierHash};
pub use input::{InputError, Nullifier, ReductionPolicy, SecretCode};
