// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Identity types.

use core::fmt;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// Storage key of a building: the lowercase hex MD5 of its name.
///
/// The id is a pure function of the name, so a record can never be renamed
/// in place; a new name means a new key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(String);

impl BuildingId {
    pub fn from_name(name: &str) -> Self {
        BuildingId(hex::encode(Md5::digest(name.as_bytes())))
    }

    /// True when `candidate` is exactly the key derived from `name`.
    pub fn matches(candidate: &str, name: &str) -> bool {
        Self::from_name(name).0 == candidate
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BuildingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BuildingId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BuildingId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
