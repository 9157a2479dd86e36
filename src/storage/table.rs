// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Mutex-guarded record table.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use crate::error::StoreError;

/// Outcome of [`Store::set_if_absent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insertion<V> {
    /// The value was written under the returned key.
    Inserted(String),
    /// The key was taken; carries the value already stored there.
    Occupied(V),
}

/// Keyed container shared by every request.
///
/// A single lock serializes all operations, reads included, so every call
/// observes a consistent table. Values are handed out as clones.
pub struct Store<V> {
    entries: Mutex<FxHashMap<String, V>>,
}

impl<V: Clone> Store<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    // No operation leaves the map half-written, so a poisoned guard is still sound.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or overwrites. Returns the key.
    pub fn set(&self, key: impl Into<String>, value: V) -> String {
        let key = key.into();
        let mut guard = self.lock();
        guard.insert(key.clone(), value);
        key
    }

    /// Inserts only when `key` is free. Lookup and write share one critical section.
    pub fn set_if_absent(&self, key: impl Into<String>, value: V) -> Insertion<V> {
        let key = key.into();
        let mut guard = self.lock();
        if let Some(existing) = guard.get(&key) {
            return Insertion::Occupied(existing.clone());
        }
        guard.insert(key.clone(), value);
        Insertion::Inserted(key)
    }

    /// Applies `f` to the stored value in place and returns the result.
    pub fn update<F>(&self, key: &str, f: F) -> Result<V, StoreError>
    where
        F: FnOnce(&mut V),
    {
        let mut guard = self.lock();
        match guard.get_mut(key) {
            Some(value) => {
                f(value);
                Ok(value.clone())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Result<V, StoreError> {
        let guard = self.lock();
        guard
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Every stored value, in no particular order. Empty is not an error here.
    pub fn get_all(&self) -> Vec<V> {
        let guard = self.lock();
        guard.values().cloned().collect()
    }

    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.lock();
        match guard.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Current value at `key`, if any. Never mutates.
    pub fn exists(&self, key: &str) -> Option<V> {
        let guard = self.lock();
        guard.get(key).cloned()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }
}

impl<V: Clone> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}
