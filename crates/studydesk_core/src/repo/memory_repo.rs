//! Process-lifetime repository backed by an insertion-ordered map.
//!
//! # Invariants
//! - Iteration order equals insertion order; `delete` keeps the relative order
//!   of the remaining records.
//! - Every mutation happens under the collection write lock.

use super::{Record, RepoError, RepoResult, Repository};
use crate::model::{new_record_id, RecordId};
use indexmap::IndexMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory collection of one record type. Contents vanish with the process.
pub struct InMemoryRepository<T> {
    records: RwLock<IndexMap<RecordId, T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }

    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, IndexMap<RecordId, T>>> {
        self.records.read().map_err(|_| RepoError::Poisoned(T::KIND))
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, IndexMap<RecordId, T>>> {
        self.records.write().map_err(|_| RepoError::Poisoned(T::KIND))
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<T: Record>(id: &str) -> RepoError {
    RepoError::NotFound {
        kind: T::KIND,
        id: id.to_string(),
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn create(&self, mut record: T) -> RepoResult<T> {
        let mut records = self.write()?;
        let mut id = new_record_id();
        while records.contains_key(&id) {
            id = new_record_id();
        }
        record.assign_id(id.clone());
        records.insert(id, record.clone());
        Ok(record)
    }

    fn insert(&self, record: T) -> RepoResult<T> {
        let id = record
            .id()
            .map(str::to_string)
            .ok_or_else(|| RepoError::InvalidData(format!("{} has no id", T::KIND)))?;
        let mut records = self.write()?;
        if records.contains_key(&id) {
            return Err(RepoError::Conflict(format!("{} id {id} already exists", T::KIND)));
        }
        records.insert(id, record.clone());
        Ok(record)
    }

    fn list(&self) -> RepoResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get(&self, id: &str) -> RepoResult<T> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    fn update(&self, id: &str, mut record: T) -> RepoResult<T> {
        let mut records = self.write()?;
        let slot = records.get_mut(id).ok_or_else(|| not_found::<T>(id))?;
        record.assign_id(id.to_string());
        *slot = record.clone();
        Ok(record)
    }

    fn update_with(&self, id: &str, apply: &mut dyn FnMut(&mut T)) -> RepoResult<T> {
        let mut records = self.write()?;
        let slot = records.get_mut(id).ok_or_else(|| not_found::<T>(id))?;
        apply(&mut *slot);
        slot.assign_id(id.to_string());
        Ok(slot.clone())
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        Ok(self.write()?.shift_remove(id).is_some())
    }
}
