// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Integration test: codeclaim-sdk used as an external dependency, with
//! artifacts going through the filesystem.
//! All imports go through `codeclaim_sdk::`, no internal crate paths.

use std::fs;
use std::path::Path;

use ark_std::rand::{rngs::StdRng, SeedableRng};
use codeclaim_sdk::artifacts::MANIFEST_FILE;
use codeclaim_sdk::{
    generate_proof, generate_test_vectors, read_bundle, verify_bundle, write_bundle, ArtifactPaths,
    ClaimConfig, ClaimError, CircuitManifest, Nullifier, PipelineOptions, ProvingArtifacts,
    ReductionPolicy, SecretCode,
};

fn store_dev_artifacts(dir: &Path, seed: u64) -> ProvingArtifacts {
    let artifacts = ProvingArtifacts::generate_dev(&mut StdRng::seed_from_u64(seed)).unwrap();
    artifacts.store(&ArtifactPaths::in_dir(dir)).unwrap();
    artifacts
}

// ── end to end ──

#[test]
fn end_to_end_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let generated = store_dev_artifacts(dir.path(), 7);

    let config = ClaimConfig::default().with_artifacts_dir(Some(dir.path().to_path_buf()));
    let loaded = ProvingArtifacts::load_dir(&config.artifacts_dir).unwrap();
    assert_eq!(loaded.verifying_key, generated.verifying_key);
    assert_eq!(loaded.manifest, CircuitManifest::current());

    let bundle = generate_proof("123456", "789012", &loaded, &PipelineOptions::from(&config)).unwrap();
    assert_eq!(
        bundle.commitment,
        codeclaim_sdk::commitment(&SecretCode::from(123456), &Nullifier::from(789012), ReductionPolicy::Reduce)
            .unwrap()
    );

    let out = dir.path().join("proofs/proof.json");
    write_bundle(&out, &bundle).unwrap();
    let back = read_bundle(&out).unwrap();
    assert_eq!(back, bundle);

    // a fresh load of the vk file alone is enough to check it
    let vk = codeclaim_sdk::artifacts::load_verifying_key(&ArtifactPaths::in_dir(dir.path()).verifying_key)
        .unwrap();
    assert!(verify_bundle(&back, &vk).unwrap());

    let calldata = back.proof.to_calldata(&back.public_signals).unwrap();
    assert_eq!(calldata.matches("0x").count(), 10);
}

#[test]
fn bundle_from_other_keys_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = store_dev_artifacts(dir.path(), 7);
    let other = ProvingArtifacts::generate_dev(&mut StdRng::seed_from_u64(8)).unwrap();

    let bundle = generate_proof("1", "2", &other, &PipelineOptions::default()).unwrap();
    assert!(!verify_bundle(&bundle, &artifacts.verifying_key).unwrap());
}

#[test]
fn scenario_c_batch_shares_nullifier_hash() {
    let artifacts = ProvingArtifacts::generate_dev(&mut StdRng::seed_from_u64(9)).unwrap();
    let pairs = vec![
        (SecretCode::from(1001), Nullifier::from(555)),
        (SecretCode::from(2002), Nullifier::from(555)),
    ];
    let bundles = generate_test_vectors(&pairs, &artifacts, &PipelineOptions::default()).unwrap();
    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].nullifier_hash, bundles[1].nullifier_hash);
    assert_ne!(bundles[0].commitment, bundles[1].commitment);
}

// ── artifact validation ──

#[test]
fn missing_artifacts_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    match ProvingArtifacts::load_dir(dir.path()) {
        Err(ClaimError::ArtifactNotFound { path }) => assert!(path.ends_with(MANIFEST_FILE)),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("loaded artifacts from an empty directory"),
    }
}

#[test]
fn reordered_signal_layout_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    store_dev_artifacts(dir.path(), 7);

    let mut manifest = CircuitManifest::current();
    manifest.public_signals.reverse();
    fs::write(
        dir.path().join(MANIFEST_FILE),
        serde_json::to_string(&manifest).unwrap(),
    )
    .unwrap();

    assert!(matches!(
        ProvingArtifacts::load_dir(dir.path()),
        Err(ClaimError::ArtifactInvalid { .. })
    ));
}

#[test]
fn mismatched_key_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    store_dev_artifacts(dir.path(), 7);

    let other = tempfile::tempdir().unwrap();
    store_dev_artifacts(other.path(), 11);
    let paths = ArtifactPaths::in_dir(dir.path());
    fs::copy(ArtifactPaths::in_dir(other.path()).verifying_key, &paths.verifying_key).unwrap();

    match ProvingArtifacts::load(&paths) {
        Err(ClaimError::ArtifactInvalid { path, .. }) => assert_eq!(path, paths.proving_key),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("accepted a verification key from another setup"),
    }
}
