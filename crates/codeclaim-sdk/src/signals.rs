// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use codeclaim_circuit::ClaimSignals;
use codeclaim_types::{decimal_to_field, field_to_decimal};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Public circuit outputs, in instance order. Serialized as decimal strings.
///
/// Never reorder: position is the only thing tying a value to a verifier input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicSignals(pub Vec<Fr>);

impl PublicSignals {
    pub fn as_slice(&self) -> &[Fr] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn claim(&self) -> Option<ClaimSignals> {
        ClaimSignals::from_slice(&self.0)
    }
}

impl From<ClaimSignals> for PublicSignals {
    fn from(signals: ClaimSignals) -> Self {
        Self(signals.to_vec())
    }
}

impl Serialize for PublicSignals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(field_to_decimal))
    }
}

impl<'de> Deserialize<'de> for PublicSignals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| decimal_to_field::<Fr>(s).map_err(de::Error::custom))
            .collect::<Result<_, _>>()
            .map(Self)
    }
}
