// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! building-store: an in-memory building registry with name-derived keys.
//!
//! - `storage`: a generic table behind one mutex (`Store<V>`).
//! - `service`: `BuildingService`, which validates candidates, derives ids
//!   and applies the create/update/delete consistency rules.
//! - `types`: the `Building` record, its candidates and `BuildingId`.

pub mod config;
pub mod error;
pub mod types;
pub mod storage;
pub mod service;

pub use config::RequiredFields;
pub use error::{Result, ServiceError, StoreError};
pub use service::BuildingService;
pub use storage::{Insertion, Store};
pub use types::building::{Building, BuildingUpdate, NewBuilding};
pub use types::id::BuildingId;

#[cfg(test)]
pub mod tests;
