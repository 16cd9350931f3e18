// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fmt;

use ark_bn254::Fr;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{field_to_hex32, hex32_to_field};
use crate::input::InputError;

macro_rules! public_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub Fr);

        impl $name {
            pub fn from_fr(fr: Fr) -> Self {
                Self(fr)
            }

            pub fn as_fr(&self) -> &Fr {
                &self.0
            }

            /// `0x` + 64 hex digits, usable as an event topic or `bytes32` argument.
            pub fn to_hex(&self) -> String {
                field_to_hex32(&self.0)
            }

            pub fn from_hex(s: &str) -> Result<Self, InputError> {
                hex32_to_field(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(de::Error::custom)
            }
        }
    };
}

public_value!(
    /// `Poseidon(secret, nullifier)`: binds the pair without revealing it.
    Commitment
);

public_value!(
    /// `Poseidon(nullifier)`: identical for every claim made with the same
    /// nullifier, which is what lets a verifier reject replays.
    NullifierHash
);
