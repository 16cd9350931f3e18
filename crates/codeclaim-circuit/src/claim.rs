// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::layout::ClaimSignals;
use crate::poseidon_gadget::{hash_pair_var, hash_single_var};

/// "I know `s`, `n` such that `Poseidon(s, n) == C` and `Poseidon(n) == N`"
#[derive(Clone, Debug, Default)]
pub struct CodeClaimCircuit {
    // Private witnesses
    pub secret: Option<Fr>,
    pub nullifier: Option<Fr>,
    // Public inputs
    pub commitment: Option<Fr>,
    pub nullifier_hash: Option<Fr>,
}

impl CodeClaimCircuit {
    /// Create a circuit with None witnesses (for setup)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(secret: Fr, nullifier: Fr, commitment: Fr, nullifier_hash: Fr) -> Self {
        Self {
            secret: Some(secret),
            nullifier: Some(nullifier),
            commitment: Some(commitment),
            nullifier_hash: Some(nullifier_hash),
        }
    }

    pub fn public_signals(&self) -> Option<ClaimSignals> {
        Some(ClaimSignals {
            commitment: self.commitment?,
            nullifier_hash: self.nullifier_hash?,
        })
    }

    /// Names of the relations the assignment breaks, checked natively.
    pub fn broken_relations(&self) -> Vec<&'static str> {
        let mut broken = Vec::new();
        let (Some(s), Some(n), Some(c), Some(nh)) =
            (self.secret, self.nullifier, self.commitment, self.nullifier_hash)
        else {
            broken.push("missing assignment");
            return broken;
        };
        if codeclaim_poseidon::hash_pair(s, n) != c {
            broken.push("Poseidon(s, n) == C");
        }
        if codeclaim_poseidon::hash_single(n) != nh {
            broken.push("Poseidon(n) == N");
        }
        broken
    }
}

impl ConstraintSynthesizer<Fr> for CodeClaimCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Public inputs, in CODE_CLAIM_LAYOUT order ===
        let commitment_pub = FpVar::new_input(cs.clone(), || {
            self.commitment.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let nullifier_hash_pub = FpVar::new_input(cs.clone(), || {
            self.nullifier_hash.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Private witnesses ===
        let secret_var = FpVar::new_witness(cs.clone(), || {
            self.secret.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let nullifier_var = FpVar::new_witness(cs, || {
            self.nullifier.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Constraint 1: commitment ===
        let computed_cm = hash_pair_var(&secret_var, &nullifier_var)?;
        computed_cm.enforce_equal(&commitment_pub)?;

        // === Constraint 2: nullifier hash ===
        let computed_nh = hash_single_var(&nullifier_var)?;
        computed_nh.enforce_equal(&nullifier_hash_pub)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_relations::r1cs::ConstraintSystem;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn honest(s: Fr, n: Fr) -> CodeClaimCircuit {
        CodeClaimCircuit::new(
            s,
            n,
            codeclaim_poseidon::hash_pair(s, n),
            codeclaim_poseidon::hash_single(n),
        )
    }

    #[test]
    fn test_valid_claim_satisfies() {
        let mut rng = test_rng();
        let circuit = honest(Fr::rand(&mut rng), Fr::rand(&mut rng));
        assert!(circuit.broken_relations().is_empty());

        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
    }

    #[test]
    fn test_instance_order_is_commitment_then_nullifier_hash() {
        let circuit = honest(Fr::from(123_456u64), Fr::from(789_012u64));
        let expected = circuit.public_signals().unwrap();

        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        let instance = cs.borrow().unwrap().instance_assignment.clone();
        // slot 0 is the constant one
        assert_eq!(instance[1..], expected.to_vec()[..]);
    }

    #[test]
    fn test_wrong_secret() {
        let mut rng = test_rng();
        let s = Fr::rand(&mut rng);
        let n = Fr::rand(&mut rng);
        let mut circuit = honest(s, n);
        circuit.secret = Some(s + Fr::from(1u64));
        assert_eq!(circuit.broken_relations(), vec!["Poseidon(s, n) == C"]);

        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap(), "should fail: wrong secret");
    }

    #[test]
    fn test_wrong_nullifier_breaks_both() {
        let mut rng = test_rng();
        let s = Fr::rand(&mut rng);
        let n = Fr::rand(&mut rng);
        let mut circuit = honest(s, n);
        circuit.nullifier = Some(Fr::rand(&mut rng));
        assert_eq!(circuit.broken_relations().len(), 2);

        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap(), "should fail: wrong nullifier");
    }

    #[test]
    fn test_missing_assignment() {
        let circuit = CodeClaimCircuit::empty();
        assert_eq!(circuit.broken_relations(), vec!["missing assignment"]);
        assert!(circuit.public_signals().is_none());
    }
}
