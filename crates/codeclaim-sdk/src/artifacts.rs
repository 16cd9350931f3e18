// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! On-disk proving artifacts.
//!
//! | File | Content |
//! |---|---|
//! | `code_claim.pk` | compressed `ProvingKey<Bn254>` |
//! | `code_claim_vk.json` | snarkjs-format verification key |
//! | `code_claim.manifest.json` | circuit id, version and public-signal order |
//!
//! Loading is all-or-nothing: every file must exist, parse, and agree with
//! the circuit compiled into this binary before anything is proved.

use std::fs;
use std::path::{Path, PathBuf};

use ark_bn254::Bn254;
use ark_groth16::{PreparedVerifyingKey, ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::{CryptoRng, RngCore};
use codeclaim_circuit::{layout_matches, CIRCUIT_ID, CIRCUIT_VERSION, CODE_CLAIM_LAYOUT, NUM_PUBLIC_SIGNALS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClaimError, ClaimResult};
use crate::vk_json::SnarkjsVerifyingKey;

pub const PROVING_KEY_FILE: &str = "code_claim.pk";
pub const VERIFYING_KEY_FILE: &str = "code_claim_vk.json";
pub const MANIFEST_FILE: &str = "code_claim.manifest.json";

/// Versioned contract shipped next to the keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CircuitManifest {
    pub circuit: String,
    pub version: u32,
    pub curve: String,
    pub field_encoding: String,
    pub public_signals: Vec<String>,
}

impl CircuitManifest {
    pub fn current() -> Self {
        Self {
            circuit: CIRCUIT_ID.into(),
            version: CIRCUIT_VERSION,
            curve: "bn128".into(),
            field_encoding: "decimal".into(),
            public_signals: CODE_CLAIM_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn check(&self) -> Result<(), String> {
        if self.circuit != CIRCUIT_ID || self.version != CIRCUIT_VERSION {
            return Err(format!(
                "built for {} v{}, this binary proves {CIRCUIT_ID} v{CIRCUIT_VERSION}",
                self.circuit, self.version
            ));
        }
        if !layout_matches(&self.public_signals) {
            return Err(format!(
                "public signal order {:?} differs from {:?}",
                self.public_signals, CODE_CLAIM_LAYOUT
            ));
        }
        if self.field_encoding != "decimal" {
            return Err(format!("unsupported field encoding {:?}", self.field_encoding));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub proving_key: PathBuf,
    pub verifying_key: PathBuf,
    pub manifest: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            proving_key: dir.join(PROVING_KEY_FILE),
            verifying_key: dir.join(VERIFYING_KEY_FILE),
            manifest: dir.join(MANIFEST_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [&self.proving_key, &self.verifying_key, &self.manifest]
    }
}

fn read(path: &Path) -> ClaimResult<Vec<u8>> {
    fs::read(path).map_err(|_| ClaimError::ArtifactNotFound {
        path: path.to_path_buf(),
    })
}

fn invalid(path: &Path, reason: impl ToString) -> ClaimError {
    ClaimError::ArtifactInvalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

pub fn load_manifest(path: &Path) -> ClaimResult<CircuitManifest> {
    let manifest: CircuitManifest =
        serde_json::from_slice(&read(path)?).map_err(|e| invalid(path, e))?;
    manifest.check().map_err(|e| invalid(path, e))?;
    Ok(manifest)
}

/// Parse a snarkjs verification key and check it against the circuit layout.
pub fn load_verifying_key(path: &Path) -> ClaimResult<VerifyingKey<Bn254>> {
    let svk: SnarkjsVerifyingKey = serde_json::from_slice(&read(path)?).map_err(|e| invalid(path, e))?;
    if svk.n_public != NUM_PUBLIC_SIGNALS {
        return Err(invalid(
            path,
            format!("nPublic = {}, circuit has {NUM_PUBLIC_SIGNALS}", svk.n_public),
        ));
    }
    svk.to_arkworks().map_err(|e| invalid(path, e))
}

/// Everything the prover and the local verifier need, loaded once and
/// shared read-only between runs.
#[derive(Clone)]
pub struct ProvingArtifacts {
    pub manifest: CircuitManifest,
    pub proving_key: ProvingKey<Bn254>,
    pub verifying_key: VerifyingKey<Bn254>,
    pub prepared: PreparedVerifyingKey<Bn254>,
}

impl ProvingArtifacts {
    pub fn from_keys(proving_key: ProvingKey<Bn254>, verifying_key: VerifyingKey<Bn254>) -> Self {
        let prepared = PreparedVerifyingKey::from(verifying_key.clone());
        Self {
            manifest: CircuitManifest::current(),
            proving_key,
            verifying_key,
            prepared,
        }
    }

    /// Fresh development keys. See [`codeclaim_circuit::setup`].
    pub fn generate_dev<R: RngCore + CryptoRng>(rng: &mut R) -> ClaimResult<Self> {
        let (pk, vk) = codeclaim_circuit::setup(rng)?;
        Ok(Self::from_keys(pk, vk))
    }

    pub fn load_dir(dir: impl AsRef<Path>) -> ClaimResult<Self> {
        Self::load(&ArtifactPaths::in_dir(dir))
    }

    pub fn load(paths: &ArtifactPaths) -> ClaimResult<Self> {
        let manifest = load_manifest(&paths.manifest)?;
        let verifying_key = load_verifying_key(&paths.verifying_key)?;

        let pk_bytes = read(&paths.proving_key)?;
        debug!(path = %paths.proving_key.display(), bytes = pk_bytes.len(), "loading proving key");
        let proving_key = ProvingKey::<Bn254>::deserialize_compressed(&pk_bytes[..])
            .map_err(|e| invalid(&paths.proving_key, e))?;
        if proving_key.vk != verifying_key {
            return Err(invalid(
                &paths.proving_key,
                "embedded verification key differs from the verification key file",
            ));
        }

        let mut artifacts = Self::from_keys(proving_key, verifying_key);
        artifacts.manifest = manifest;
        debug!(circuit = %artifacts.manifest.circuit, version = artifacts.manifest.version, "artifacts loaded");
        Ok(artifacts)
    }

    pub fn store(&self, paths: &ArtifactPaths) -> ClaimResult<()> {
        for path in paths.all() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut pk_bytes = Vec::new();
        self.proving_key
            .serialize_compressed(&mut pk_bytes)
            .map_err(|e| invalid(&paths.proving_key, e))?;
        fs::write(&paths.proving_key, pk_bytes)?;

        let svk = SnarkjsVerifyingKey::from_arkworks(&self.verifying_key);
        fs::write(&paths.verifying_key, serde_json::to_string_pretty(&svk)?)?;
        fs::write(&paths.manifest, serde_json::to_string_pretty(&self.manifest)?)?;
        debug!(dir = ?paths.proving_key.parent(), "artifacts written");
        Ok(())
    }
}
