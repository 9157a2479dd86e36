// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Building service: schema, key derivation and the consistency rules
//! applied around every store mutation.

use std::sync::Arc;

use chrono::Utc;

use crate::config::RequiredFields;
use crate::error::{Result, ServiceError};
use crate::storage::{Insertion, Store};
use crate::types::building::{Building, BuildingUpdate, NewBuilding};
use crate::types::id::BuildingId;

pub struct BuildingService {
    store: Arc<Store<Building>>,
    policy: RequiredFields,
}

impl BuildingService {
    /// Service over a fresh, empty store.
    pub fn new(policy: RequiredFields) -> Self {
        Self::with_store(Arc::new(Store::new()), policy)
    }

    pub fn with_store(store: Arc<Store<Building>>, policy: RequiredFields) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> RequiredFields {
        self.policy
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Stores a new building and returns its derived id.
    ///
    /// Fails with `AlreadyExists` when the name is taken; an existing record
    /// is never overwritten by a create.
    pub fn create(&self, candidate: NewBuilding) -> Result<BuildingId> {
        let candidate = candidate.normalize(self.policy)?;
        let record = Building::new(candidate.name, candidate.address, candidate.floors, Utc::now());
        let id = record.id.clone();

        match self.store.set_if_absent(id.as_str(), record) {
            Insertion::Occupied(_) => {
                tracing::debug!("Create rejected, {} already stored", id);
                Err(ServiceError::AlreadyExists(id))
            }
            Insertion::Inserted(key) if id != key.as_str() => {
                tracing::warn!("Store returned key {} for {}", key, id);
                Err(ServiceError::StorageFailure)
            }
            Insertion::Inserted(_) => {
                tracing::info!("Created building {}", id);
                Ok(id)
            }
        }
    }

    /// Replaces address and floors of an existing building.
    ///
    /// The id/name pair is checked before the lookup, so a mismatch is
    /// reported whether or not either key is stored. `name` and `created`
    /// are never touched.
    pub fn update(&self, candidate: BuildingUpdate) -> Result<()> {
        let candidate = candidate.normalize(self.policy)?;
        if !BuildingId::matches(&candidate.id, &candidate.name) {
            return Err(ServiceError::Mismatch {
                id: candidate.id,
                name: candidate.name,
            });
        }

        let BuildingUpdate { id, address, floors, .. } = candidate;
        self.store.update(&id, |record| {
            record.address = address;
            record.floors = floors;
            record.modified = Some(Utc::now());
        })?;

        tracing::info!("Updated building {}", id);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Building> {
        let id = required_id(id)?;
        tracing::debug!("Get building {}", id);
        Ok(self.store.get(id)?)
    }

    /// All stored buildings. An empty store is reported as `EmptyResult`.
    pub fn get_all(&self) -> Result<Vec<Building>> {
        let all = self.store.get_all();
        if all.is_empty() {
            return Err(ServiceError::EmptyResult);
        }
        Ok(all)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let id = required_id(id)?;
        self.store.delete(id)?;
        tracing::info!("Deleted building {}", id);
        Ok(())
    }
}

impl Default for BuildingService {
    fn default() -> Self {
        Self::new(RequiredFields::default())
    }
}

fn required_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ServiceError::MissingRequiredField("id"));
    }
    Ok(id)
}
