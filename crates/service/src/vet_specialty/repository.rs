use async_trait::async_trait;

use super::domain::VetSpecialty;
use crate::errors::ServiceError;

/// Repository abstraction for vet-specialty persistence.
#[async_trait]
pub trait VetSpecialtyRepository: Send + Sync {
    async fn get(&self, vet_id: i32, specialty_id: i32) -> Result<Option<VetSpecialty>, ServiceError>;
    /// Fails with `Conflict` when the key is already stored, even if an earlier `get` missed it.
    async fn insert(&self, record: VetSpecialty) -> Result<VetSpecialty, ServiceError>;
    /// Replace the row with the record's key; `None` if it does not exist.
    async fn replace(&self, record: VetSpecialty) -> Result<Option<VetSpecialty>, ServiceError>;
    /// Returns true if a row was removed.
    async fn remove(&self, vet_id: i32, specialty_id: i32) -> Result<bool, ServiceError>;
    async fn list_by_vet(&self, vet_id: i32) -> Result<Vec<VetSpecialty>, ServiceError>;
    async fn list_by_specialty(&self, specialty_id: i32) -> Result<Vec<VetSpecialty>, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct InMemoryVetSpecialtyRepository {
        rows: Mutex<BTreeMap<(i32, i32), VetSpecialty>>, // key: (vet_id, specialty_id)
    }

    impl InMemoryVetSpecialtyRepository {
        pub fn with_records(records: impl IntoIterator<Item = VetSpecialty>) -> Self {
            let rows = records.into_iter().map(|r| (r.key(), r)).collect();
            Self { rows: Mutex::new(rows) }
        }

        fn rows(&self) -> Result<MutexGuard<'_, BTreeMap<(i32, i32), VetSpecialty>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl VetSpecialtyRepository for InMemoryVetSpecialtyRepository {
        async fn get(&self, vet_id: i32, specialty_id: i32) -> Result<Option<VetSpecialty>, ServiceError> {
            Ok(self.rows()?.get(&(vet_id, specialty_id)).cloned())
        }

        async fn insert(&self, record: VetSpecialty) -> Result<VetSpecialty, ServiceError> {
            let mut rows = self.rows()?;
            if rows.contains_key(&record.key()) {
                return Err(ServiceError::already_exists("vet_specialty"));
            }
            rows.insert(record.key(), record.clone());
            Ok(record)
        }

        async fn replace(&self, record: VetSpecialty) -> Result<Option<VetSpecialty>, ServiceError> {
            let mut rows = self.rows()?;
            match rows.get_mut(&record.key()) {
                Some(slot) => {
                    *slot = record.clone();
                    Ok(Some(record))
                }
                None => Ok(None),
            }
        }

        async fn remove(&self, vet_id: i32, specialty_id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows()?.remove(&(vet_id, specialty_id)).is_some())
        }

        async fn list_by_vet(&self, vet_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> {
            Ok(self.rows()?.values().filter(|r| r.vet_id == vet_id).cloned().collect())
        }

        async fn list_by_specialty(&self, specialty_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> {
            Ok(self.rows()?.values().filter(|r| r.specialty_id == specialty_id).cloned().collect())
        }
    }
}
