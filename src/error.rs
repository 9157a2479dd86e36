// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::types::id::BuildingId;

/// Failures reported by the raw [`Store`](crate::storage::table::Store).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),
}

/// Business-rule outcomes surfaced by the record service.
///
/// None of these are fatal; the transport decides how each one is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Validation failed, names the offending field.
    #[error("missing required parameter: {0}")]
    MissingRequiredField(&'static str),
    /// A record with the same name (and therefore id) is already stored.
    #[error("record exists: {0}")]
    AlreadyExists(BuildingId),
    /// The supplied id is not the hash of the supplied name.
    #[error("record id/name mismatch: {id} is not the key of {name:?}")]
    Mismatch { id: String, name: String },
    #[error("record not found: {0}")]
    NotFound(String),
    /// List-all found nothing.
    #[error("record(s) not found")]
    EmptyResult,
    /// The store handed back a key other than the one written.
    #[error("db storage failed")]
    StorageFailure,
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(key) => ServiceError::NotFound(key),
        }
    }
}

pub type Result<T> = core::result::Result<T, ServiceError>;
