// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fmt;
use std::str::FromStr;

use ark_bn254::Fr;
use ark_ff::PrimeField;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty integer literal")]
    Empty,

    #[error("not a decimal or 0x-prefixed hex unsigned integer: {0:?}")]
    Malformed(String),

    #[error("{bits}-bit value is not below the BN254 scalar field modulus")]
    OutOfField { bits: u64 },

    #[error("unknown reduction policy {0:?} (expected `reduce` or `strict`)")]
    UnknownPolicy(String),
}

/// How a claim input that may exceed the scalar field order becomes a field
/// element. Applied exactly once per pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionPolicy {
    /// `value mod r`, the same normalisation circomlib and snarkjs apply.
    #[default]
    Reduce,
    /// Reject anything `>= r`.
    Strict,
}

impl ReductionPolicy {
    pub fn to_field(self, value: &BigUint) -> Result<Fr, InputError> {
        let modulus: BigUint = Fr::MODULUS.into();
        match self {
            Self::Reduce => Ok(Fr::from(value % &modulus)),
            Self::Strict if *value >= modulus => Err(InputError::OutOfField { bits: value.bits() }),
            Self::Strict => Ok(Fr::from(value.clone())),
        }
    }
}

impl FromStr for ReductionPolicy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reduce" => Ok(Self::Reduce),
            "strict" => Ok(Self::Strict),
            other => Err(InputError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ReductionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduce => f.write_str("reduce"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Parse a decimal or `0x`-prefixed hex unsigned integer of any width.
pub fn parse_uint(s: &str) -> Result<BigUint, InputError> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() {
        return Err(InputError::Empty);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(InputError::Malformed(s.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| InputError::Malformed(s.to_string()))
}

macro_rules! claim_scalar {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(BigUint);

        impl $name {
            pub fn new(value: BigUint) -> Self {
                Self(value)
            }

            pub fn value(&self) -> &BigUint {
                &self.0
            }

            pub fn to_field(&self, policy: ReductionPolicy) -> Result<Fr, InputError> {
                policy.to_field(&self.0)
            }
        }

        impl From<u64> for $name {
            fn from(v: u64) -> Self {
                Self(BigUint::from(v))
            }
        }

        impl From<BigUint> for $name {
            fn from(v: BigUint) -> Self {
                Self(v)
            }
        }

        impl FromStr for $name {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_uint(s).map(Self)
            }
        }

        // never print the value itself
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(<{} bits>)", stringify!($name), self.0.bits())
            }
        }
    };
}

claim_scalar!(
    /// The claimant's private code.
    SecretCode
);

claim_scalar!(
    /// Single-use value bound to one claim. Only its hash is published.
    Nullifier
);

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{BigInteger, Zero};

    fn modulus() -> BigUint {
        Fr::MODULUS.into()
    }

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_uint("123456").unwrap(), BigUint::from(123_456u64));
        assert_eq!(parse_uint("0x1e240").unwrap(), BigUint::from(123_456u64));
        assert_eq!(parse_uint("0X1E240").unwrap(), BigUint::from(123_456u64));
        assert_eq!(parse_uint("  42 ").unwrap(), BigUint::from(42u64));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_uint(""), Err(InputError::Empty));
        assert_eq!(parse_uint("0x"), Err(InputError::Empty));
        assert!(matches!(parse_uint("-5"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_uint("+5"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_uint("12ab"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_uint("0xzz"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_uint("1_000"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn parses_values_wider_than_256_bits() {
        let wide = format!("0x1{}", "0".repeat(80));
        let v = parse_uint(&wide).unwrap();
        assert_eq!(v.bits(), 321);
    }

    #[test]
    fn reduce_wraps_modulus() {
        let r = modulus();
        assert!(ReductionPolicy::Reduce.to_field(&r).unwrap().is_zero());
        assert_eq!(
            ReductionPolicy::Reduce.to_field(&(&r + 7u32)).unwrap(),
            Fr::from(7u64)
        );
    }

    #[test]
    fn strict_rejects_modulus_and_above() {
        let r = modulus();
        assert!(matches!(
            ReductionPolicy::Strict.to_field(&r),
            Err(InputError::OutOfField { bits: 254 })
        ));
        let below = &r - 1u32;
        let fe = ReductionPolicy::Strict.to_field(&below).unwrap();
        assert_eq!(fe, -Fr::from(1u64));
    }

    #[test]
    fn policies_agree_below_modulus() {
        let v = BigUint::from(789_012u64);
        assert_eq!(
            ReductionPolicy::Reduce.to_field(&v).unwrap(),
            ReductionPolicy::Strict.to_field(&v).unwrap()
        );
    }

    #[test]
    fn scenario_b_inputs_straddle_the_modulus() {
        let secret: SecretCode = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
            .parse()
            .unwrap();
        let nullifier: Nullifier = "0xfedcba0987654321fedcba0987654321fedcba0987654321fedcba0987654321"
            .parse()
            .unwrap();

        // secret already fits, nullifier does not
        assert!(secret.to_field(ReductionPolicy::Strict).is_ok());
        assert!(nullifier.to_field(ReductionPolicy::Strict).is_err());

        let reduced = nullifier.to_field(ReductionPolicy::Reduce).unwrap();
        let expected = nullifier.value() % modulus();
        let got: BigUint = reduced.into_bigint().into();
        assert_eq!(got, expected);
        assert_eq!(reduced.into_bigint().to_bytes_be().len(), 32);
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("reduce".parse::<ReductionPolicy>().unwrap(), ReductionPolicy::Reduce);
        assert_eq!("STRICT".parse::<ReductionPolicy>().unwrap(), ReductionPolicy::Strict);
        assert!("wrap".parse::<ReductionPolicy>().is_err());
        assert_eq!(ReductionPolicy::default(), ReductionPolicy::Reduce);
    }

    #[test]
    fn debug_hides_value() {
        let s = SecretCode::from(123_456u64);
        let dbg = format!("{s:?}");
        assert!(!dbg.contains("123456"));
        assert_eq!(dbg, "SecretCode(<17 bits>)");
    }
}
