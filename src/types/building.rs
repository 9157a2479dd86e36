// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Building record and the candidates used to create or update one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RequiredFields;
use crate::error::{Result, ServiceError};
use crate::types::id::BuildingId;

/// A stored building. `id` is always `BuildingId::from_name(&name)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub floors: Vec<String>,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl Building {
    pub fn new(name: String, address: String, floors: Vec<String>, created: DateTime<Utc>) -> Self {
        Self {
            id: BuildingId::from_name(&name),
            name,
            address,
            floors,
            created,
            modified: None,
        }
    }
}

/// Create candidate, as bound from a request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBuilding {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub floors: Vec<String>,
}

impl NewBuilding {
    pub fn new(name: impl Into<String>, address: impl Into<String>, floors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            floors,
        }
    }

    /// Trims name and address, then checks them against `policy`.
    pub fn normalize(mut self, policy: RequiredFields) -> Result<Self> {
        self.name = self.name.trim().to_string();
        self.address = self.address.trim().to_string();
        check_fields(&self.name, &self.address, &self.floors, policy)?;
        Ok(self)
    }
}

/// Update candidate. `id` must be the key derived from `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingUpdate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub floors: Vec<String>,
}

impl BuildingUpdate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        floors: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            floors,
        }
    }

    pub fn normalize(mut self, policy: RequiredFields) -> Result<Self> {
        self.id = self.id.trim().to_string();
        self.name = self.name.trim().to_string();
        self.address = self.address.trim().to_string();
        if self.id.is_empty() {
            return Err(ServiceError::MissingRequiredField("id"));
        }
        check_fields(&self.name, &self.address, &self.floors, policy)?;
        Ok(self)
    }
}

fn check_fields(name: &str, address: &str, floors: &[String], policy: RequiredFields) -> Result<()> {
    if name.is_empty() {
        return Err(ServiceError::MissingRequiredField("name"));
    }
    if policy.requires_details() {
        if address.is_empty() {
            return Err(ServiceError::MissingRequiredField("address"));
        }
        if floors.is_empty() {
            return Err(ServiceError::MissingRequiredField("floors"));
        }
    }
    Ok(())
}
