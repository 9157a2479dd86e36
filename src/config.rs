// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Validation policy.

use serde::{Deserialize, Serialize};

/// Which candidate fields must be present on create and update.
///
/// `name` is always required (and `id` on update). `All` additionally
/// demands a non-empty address and at least one floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredFields {
    #[default]
    NameOnly,
    All,
}

impl RequiredFields {
    pub fn requires_details(&self) -> bool {
        matches!(self, RequiredFields::All)
    }
}
