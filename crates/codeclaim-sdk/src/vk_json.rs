// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs `verification_key.json` / `proof.json` ↔ arkworks.
//!
//! Points are projective triples of decimal strings with `z = 1` (or the
//! snarkjs infinity encoding). G2 coordinates keep the native `[c0, c1]`
//! order here; only the on-chain proof encoding swaps them.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_groth16::{Proof, VerifyingKey};
use codeclaim_types::field_to_decimal;
use serde::{Deserialize, Serialize};

use crate::points::{fq2, g1_from_xy, g2_from_coeffs};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnarkjsVerifyingKey {
    pub protocol: String,
    pub curve: String,
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    pub vk_alpha_1: [String; 3],
    pub vk_beta_2: [[String; 2]; 3],
    pub vk_gamma_2: [[String; 2]; 3],
    pub vk_delta_2: [[String; 2]; 3],
    #[serde(rename = "IC")]
    pub ic: Vec<[String; 3]>,
}

fn g1_json(p: &G1Affine) -> [String; 3] {
    if p.infinity {
        return ["0".into(), "1".into(), "0".into()];
    }
    [field_to_decimal(&p.x), field_to_decimal(&p.y), "1".into()]
}

fn g2_json(p: &G2Affine) -> [[String; 2]; 3] {
    if p.infinity {
        return [
            ["0".into(), "0".into()],
            ["1".into(), "0".into()],
            ["0".into(), "0".into()],
        ];
    }
    [
        [field_to_decimal(&p.x.c0), field_to_decimal(&p.x.c1)],
        [field_to_decimal(&p.y.c0), field_to_decimal(&p.y.c1)],
        ["1".into(), "0".into()],
    ]
}

fn g1_parse(name: &str, p: &[String; 3]) -> Result<G1Affine, String> {
    match p[2].as_str() {
        "0" => Ok(G1Affine::identity()),
        "1" => g1_from_xy(&p[0], &p[1]).map_err(|e| format!("{name}: {e}")),
        z => Err(format!("{name}: expected affine z = 1, got {z}")),
    }
}

fn g2_parse(name: &str, p: &[[String; 2]; 3]) -> Result<G2Affine, String> {
    match (p[2][0].as_str(), p[2][1].as_str()) {
        ("0", "0") => Ok(G2Affine::identity()),
        ("1", "0") => {
            let x = fq2(&p[0][0], &p[0][1]).map_err(|e| format!("{name}: {e}"))?;
            let y = fq2(&p[1][0], &p[1][1]).map_err(|e| format!("{name}: {e}"))?;
            g2_from_coeffs(x, y).map_err(|e| format!("{name}: {e}"))
        }
        (z0, z1) => Err(format!("{name}: expected affine z = [1, 0], got [{z0}, {z1}]")),
    }
}

impl SnarkjsVerifyingKey {
    pub fn from_arkworks(vk: &VerifyingKey<Bn254>) -> Self {
        Self {
            protocol: "groth16".into(),
            curve: "bn128".into(),
            n_public: vk.gamma_abc_g1.len().saturating_sub(1),
            vk_alpha_1: g1_json(&vk.alpha_g1),
            vk_beta_2: g2_json(&vk.beta_g2),
            vk_gamma_2: g2_json(&vk.gamma_g2),
            vk_delta_2: g2_json(&vk.delta_g2),
            ic: vk.gamma_abc_g1.iter().map(g1_json).collect(),
        }
    }

    /// Rebuild the arkworks key, checking protocol, curve, point validity
    /// and that `IC` has `nPublic + 1` entries.
    pub fn to_arkworks(&self) -> Result<VerifyingKey<Bn254>, String> {
        check_header(&self.protocol, &self.curve)?;
        if self.ic.len() != self.n_public + 1 {
            return Err(format!(
                "IC has {} entries, nPublic = {} requires {}",
                self.ic.len(),
                self.n_public,
                self.n_public + 1
            ));
        }
        Ok(VerifyingKey {
            alpha_g1: g1_parse("vk_alpha_1", &self.vk_alpha_1)?,
            beta_g2: g2_parse("vk_beta_2", &self.vk_beta_2)?,
            gamma_g2: g2_parse("vk_gamma_2", &self.vk_gamma_2)?,
            delta_g2: g2_parse("vk_delta_2", &self.vk_delta_2)?,
            gamma_abc_g1: self
                .ic
                .iter()
                .enumerate()
                .map(|(i, p)| g1_parse(&format!("IC[{i}]"), p))
                .collect::<Result<_, _>>()?,
        })
    }
}

fn check_header(protocol: &str, curve: &str) -> Result<(), String> {
    if protocol != "groth16" {
        return Err(format!("unsupported protocol {protocol:?}"));
    }
    if curve != "bn128" && curve != "bn254" {
        return Err(format!("unsupported curve {curve:?}"));
    }
    Ok(())
}

/// snarkjs `proof.json`. `pi_b` keeps the native `[c0, c1]` order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnarkjsProof {
    pub pi_a: [String; 3],
    pub pi_b: [[String; 2]; 3],
    pub pi_c: [String; 3],
    pub protocol: String,
    pub curve: String,
}

impl SnarkjsProof {
    pub fn from_arkworks(proof: &Proof<Bn254>) -> Self {
        Self {
            pi_a: g1_json(&proof.a),
            pi_b: g2_json(&proof.b),
            pi_c: g1_json(&proof.c),
            protocol: "groth16".into(),
            curve: "bn128".into(),
        }
    }

    pub fn to_arkworks(&self) -> Result<Proof<Bn254>, String> {
        check_header(&self.protocol, &self.curve)?;
        Ok(Proof {
            a: g1_parse("pi_a", &self.pi_a)?,
            b: g2_parse("pi_b", &self.pi_b)?,
            c: g1_parse("pi_c", &self.pi_c)?,
        })
    }
}
