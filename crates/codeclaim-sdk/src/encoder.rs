// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → EVM verifier encoding.
//!
//! Converts a Groth16 proof (BN254) into the `uint256[2] a`,
//! `uint256[2][2] b`, `uint256[2] c` arguments a bn128-precompile verifier
//! takes.
//!
//! # Coordinate order
//!
//! - **G1 points** (`a`, `c`): `[x, y]`.
//! - **G2 point** (`b`): each Fq2 coordinate is written imaginary part
//!   first, `[[x.c1, x.c0], [y.c1, y.c0]]`. The pairing precompile (EIP-197)
//!   reads Fq2 elements in that order; arkworks and snarkjs keep `c0` first.
//!   Emitting `b` unswapped yields proofs that verify locally and revert
//!   on-chain.
//! - **Point at infinity**: `[0, 0]` (and all-zero for G2).
//!
//! Values are decimal strings, as snarkjs writes them.
//!
//! # Example
//!
//! ```rust,no_run
//! use codeclaim_sdk::encoder::encode;
//!
//! # fn example(proof: &ark_groth16::Proof<ark_bn254::Bn254>, signals: &codeclaim_sdk::PublicSignals) {
//! let onchain = encode(proof);
//! // onchain.a, onchain.b, onchain.c: verifier arguments
//! let calldata = onchain.to_calldata(signals).unwrap();
//! # }
//! ```

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_groth16::Proof;
use codeclaim_types::field_to_decimal;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{ClaimError, ClaimResult};
use crate::points::{fq2, g1_from_xy, g2_from_coeffs};
use crate::signals::PublicSignals;

/// Verifier-ready proof. `b` inner pairs are swapped, see module docs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnChainProof {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
}

fn g1_words(p: &G1Affine) -> [String; 2] {
    if p.infinity {
        return ["0".into(), "0".into()];
    }
    [field_to_decimal(&p.x), field_to_decimal(&p.y)]
}

fn g2_words_swapped(p: &G2Affine) -> [[String; 2]; 2] {
    if p.infinity {
        return [["0".into(), "0".into()], ["0".into(), "0".into()]];
    }
    [
        [field_to_decimal(&p.x.c1), field_to_decimal(&p.x.c0)],
        [field_to_decimal(&p.y.c1), field_to_decimal(&p.y.c0)],
    ]
}

pub fn encode(proof: &Proof<Bn254>) -> OnChainProof {
    OnChainProof {
        a: g1_words(&proof.a),
        b: g2_words_swapped(&proof.b),
        c: g1_words(&proof.c),
    }
}

/// 32-byte big-endian word, `0x`-prefixed.
fn word(decimal: &str) -> ClaimResult<String> {
    let v = BigUint::parse_bytes(decimal.as_bytes(), 10)
        .filter(|_| decimal.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| ClaimError::MalformedProof(format!("not a decimal word: {decimal:?}")))?;
    let hex = v.to_str_radix(16);
    if hex.len() > 64 {
        return Err(ClaimError::MalformedProof(format!("{decimal} exceeds 256 bits")));
    }
    Ok(format!("0x{hex:0>64}"))
}

fn pair(words: &[String; 2]) -> ClaimResult<String> {
    Ok(format!("[\"{}\", \"{}\"]", word(&words[0])?, word(&words[1])?))
}

impl OnChainProof {
    /// Undo [`encode`]: rebuild the arkworks proof, un-swapping `b` and
    /// checking every point is on the curve and in the right subgroup.
    pub fn decode(&self) -> ClaimResult<Proof<Bn254>> {
        let bad = |what: &str, e: String| ClaimError::MalformedProof(format!("{what}: {e}"));

        let a = g1_from_xy(&self.a[0], &self.a[1]).map_err(|e| bad("a", e))?;
        let c = g1_from_xy(&self.c[0], &self.c[1]).map_err(|e| bad("c", e))?;
        let [[x_c1, x_c0], [y_c1, y_c0]] = &self.b;
        let x = fq2(x_c0, x_c1).map_err(|e| bad("b", e))?;
        let y = fq2(y_c0, y_c1).map_err(|e| bad("b", e))?;
        let b = g2_from_coeffs(x, y).map_err(|e| bad("b", e))?;

        Ok(Proof { a, b, c })
    }

    /// `verifyProof(a, b, c, input)` arguments as 32-byte hex words, in the
    /// layout `snarkjs zkey export soliditycalldata` prints.
    pub fn to_calldata(&self, signals: &PublicSignals) -> ClaimResult<String> {
        let inputs = signals
            .as_slice()
            .iter()
            .map(|s| word(&field_to_decimal(s)).map(|w| format!("\"{w}\"")))
            .collect::<ClaimResult<Vec<_>>>()?;
        Ok(format!(
            "{},[{},{}],{},[{}]",
            pair(&self.a)?,
            pair(&self.b[0])?,
            pair(&self.b[1])?,
            pair(&self.c)?,
            inputs.join(",")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{dev_artifacts, scenario_a_witness};
    use ark_ec::AffineRepr;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn scenario_a_proof() -> (Proof<Bn254>, PublicSignals) {
        let mut rng = StdRng::seed_from_u64(5);
        crate::engine::prove(&scenario_a_witness(), dev_artifacts(), &mut rng).unwrap()
    }

    #[test]
    fn b_coefficients_are_swapped() {
        let (proof, _) = scenario_a_proof();
        let onchain = encode(&proof);
        assert_eq!(onchain.b[0][0], field_to_decimal(&proof.b.x.c1));
        assert_eq!(onchain.b[0][1], field_to_decimal(&proof.b.x.c0));
        assert_eq!(onchain.b[1][0], field_to_decimal(&proof.b.y.c1));
        assert_eq!(onchain.b[1][1], field_to_decimal(&proof.b.y.c0));
        assert_eq!(onchain.a, [field_to_decimal(&proof.a.x), field_to_decimal(&proof.a.y)]);
        assert_eq!(onchain.c, [field_to_decimal(&proof.c.x), field_to_decimal(&proof.c.y)]);
    }

    #[test]
    fn g2_generator_matches_eip197_encoding() {
        // EIP-197 / Pairing.sol P2(): [x_im, x_re], [y_im, y_re]
        let words = [
            [
                "11559732032986387107991004021392285783925812861821192530917403151452391805634",
                "10857046999023057135944570762232829481370756359578518086990519993285655852781",
            ],
            [
                "4082367875863433681332203403145435568316851327593401208105741076214120093531",
                "8495653923123431417604973247489272438418190587263600148770280649306958101930",
            ],
        ];
        let proof = Proof::<Bn254> {
            a: G1Affine::generator(),
            b: G2Affine::generator(),
            c: G1Affine::generator(),
        };
        let onchain = encode(&proof);
        assert_eq!(onchain.a, ["1", "2"]);
        assert_eq!(onchain.b, words.map(|p| p.map(String::from)));
        assert_eq!(onchain.decode().unwrap(), proof);
    }

    #[test]
    fn decode_inverts_encode() {
        let (proof, _) = scenario_a_proof();
        assert_eq!(encode(&proof).decode().unwrap(), proof);
    }

    #[test]
    fn unswapped_b_does_not_decode_to_the_proof() {
        let (proof, signals) = scenario_a_proof();
        let mut onchain = encode(&proof);
        for coord in onchain.b.iter_mut() {
            coord.swap(0, 1);
        }
        // either off-curve, or a different point that fails verification
        match onchain.decode() {
            Err(ClaimError::MalformedProof(_)) => {}
            Ok(decoded) => {
                assert_ne!(decoded, proof);
                let vk = &dev_artifacts().verifying_key;
                assert!(!crate::verifier::verify(&decoded, &signals, vk).unwrap());
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn infinity_encodes_as_zero() {
        let (mut proof, _) = scenario_a_proof();
        proof.a = G1Affine::identity();
        proof.b = G2Affine::identity();
        let onchain = encode(&proof);
        assert_eq!(onchain.a, ["0", "0"]);
        assert!(onchain.b.iter().flatten().all(|w| w == "0"));
        let decoded = onchain.decode().unwrap();
        assert!(decoded.a.infinity && decoded.b.infinity);
    }

    #[test]
    fn json_shape() {
        let (proof, _) = scenario_a_proof();
        let value = serde_json::to_value(encode(&proof)).unwrap();
        assert_eq!(value["a"].as_array().unwrap().len(), 2);
        assert_eq!(value["b"].as_array().unwrap().len(), 2);
        assert_eq!(value["b"][0].as_array().unwrap().len(), 2);
        assert_eq!(value["c"].as_array().unwrap().len(), 2);
        assert!(value["a"][0].is_string());
    }

    #[test]
    fn calldata_layout() {
        let (proof, signals) = scenario_a_proof();
        let calldata = encode(&proof).to_calldata(&signals).unwrap();
        // a(2) + b(4) + c(2) + inputs(2)
        assert_eq!(calldata.matches("\"0x").count(), 10);
        assert!(calldata.starts_with("[\"0x"));
        assert!(calldata.ends_with("\"]"));
        for w in calldata.split('"').filter(|s| s.starts_with("0x")) {
            assert_eq!(w.len(), 66);
        }
    }

    #[test]
    fn word_padding() {
        assert_eq!(word("1").unwrap(), format!("0x{}1", "0".repeat(63)));
        assert!(word("-1").is_err());
        assert!(word(&format!("1{}", "0".repeat(80))).is_err());
    }
}
