// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Witness assembly for the code-claim circuit.
//!
//! [`ReducedPair::new`] is the one place where claim inputs become field
//! elements. Hashing and witness construction both consume its output, so
//! the circuit always sees the same values the commitment was computed from.

use ark_bn254::Fr;
use codeclaim_circuit::CodeClaimCircuit;
use codeclaim_types::{
    decimal_to_field, field_to_decimal, Commitment, InputError, Nullifier, NullifierHash,
    ReductionPolicy, SecretCode,
};
use serde::{Deserialize, Serialize};

use crate::error::{ClaimError, ClaimResult};

/// Secret and nullifier after the reduction step.
#[derive(Clone, Copy)]
pub struct ReducedPair {
    pub secret: Fr,
    pub nullifier: Fr,
}

impl ReducedPair {
    pub fn new(
        secret: &SecretCode,
        nullifier: &Nullifier,
        policy: ReductionPolicy,
    ) -> Result<Self, InputError> {
        Ok(Self {
            secret: secret.to_field(policy)?,
            nullifier: nullifier.to_field(policy)?,
        })
    }

    pub fn commitment(&self) -> Commitment {
        Commitment(codeclaim_poseidon::hash_pair(self.secret, self.nullifier))
    }

    pub fn nullifier_hash(&self) -> NullifierHash {
        NullifierHash(codeclaim_poseidon::hash_single(self.nullifier))
    }
}

/// The circuit's named input record, decimal-encoded like a circom `input.json`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WitnessInput {
    pub s: String,
    pub n: String,
    #[serde(rename = "C")]
    pub commitment: String,
    #[serde(rename = "N")]
    pub nullifier_hash: String,
}

impl WitnessInput {
    pub fn build(
        secret: Fr,
        nullifier: Fr,
        commitment: &Commitment,
        nullifier_hash: &NullifierHash,
    ) -> Self {
        Self {
            s: field_to_decimal(&secret),
            n: field_to_decimal(&nullifier),
            commitment: field_to_decimal(commitment.as_fr()),
            nullifier_hash: field_to_decimal(nullifier_hash.as_fr()),
        }
    }

    /// Field assignment for the circuit. A slot that is not a canonical
    /// decimal field element cannot satisfy the circuit.
    pub fn to_circuit(&self) -> ClaimResult<CodeClaimCircuit> {
        let slot = |name: &str, value: &str| {
            decimal_to_field::<Fr>(value)
                .map_err(|e| ClaimError::ConstraintUnsatisfied(format!("witness slot {name}: {e}")))
        };
        Ok(CodeClaimCircuit::new(
            slot("s", &self.s)?,
            slot("n", &self.n)?,
            slot("C", &self.commitment)?,
            slot("N", &self.nullifier_hash)?,
        ))
    }
}

// s and n are private
impl std::fmt::Debug for WitnessInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WitnessInput")
            .field("s", &"<private>")
            .field("n", &"<private>")
            .field("C", &self.commitment)
            .field("N", &self.nullifier_hash)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> ReducedPair {
        ReducedPair::new(
            &SecretCode::from(123_456u64),
            &Nullifier::from(789_012u64),
            ReductionPolicy::Reduce,
        )
        .unwrap()
    }

    #[test]
    fn build_uses_circuit_slot_names() {
        let pair = scenario_a();
        let w = WitnessInput::build(pair.secret, pair.nullifier, &pair.commitment(), &pair.nullifier_hash());
        assert_eq!(w.s, "123456");
        assert_eq!(w.n, "789012");

        let json = serde_json::to_value(&w).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for k in ["s", "n", "C", "N"] {
            assert!(keys.contains(&k), "missing slot {k}");
        }
    }

    #[test]
    fn circuit_roundtrip_is_satisfied() {
        let pair = scenario_a();
        let w = WitnessInput::build(pair.secret, pair.nullifier, &pair.commitment(), &pair.nullifier_hash());
        let circuit = w.to_circuit().unwrap();
        assert_eq!(circuit.secret, Some(pair.secret));
        assert!(codeclaim_circuit::is_satisfied(circuit).unwrap());
    }

    #[test]
    fn malformed_slot_is_unsatisfied() {
        let pair = scenario_a();
        let mut w = WitnessInput::build(pair.secret, pair.nullifier, &pair.commitment(), &pair.nullifier_hash());
        w.commitment = "0xdead".into();
        assert!(matches!(w.to_circuit(), Err(ClaimError::ConstraintUnsatisfied(_))));
    }

    #[test]
    fn hashes_match_poseidon_crate() {
        let secret = SecretCode::from(123_456u64);
        let nullifier = Nullifier::from(789_012u64);
        let pair = ReducedPair::new(&secret, &nullifier, ReductionPolicy::Reduce).unwrap();
        assert_eq!(
            pair.commitment(),
            codeclaim_poseidon::commitment(&secret, &nullifier, ReductionPolicy::Reduce).unwrap()
        );
        assert_eq!(
            pair.nullifier_hash(),
            codeclaim_poseidon::nullifier_hash(&nullifier, ReductionPolicy::Reduce).unwrap()
        );
    }

    #[test]
    fn debug_hides_private_slots() {
        let pair = scenario_a();
        let w = WitnessInput::build(pair.secret, pair.nullifier, &pair.commitment(), &pair.nullifier_hash());
        let dbg = format!("{w:?}");
        assert!(!dbg.contains("123456"));
        assert!(!dbg.contains("789012"));
    }
}
