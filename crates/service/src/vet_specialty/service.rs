use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::VetSpecialty;
use super::repository::VetSpecialtyRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "vet_specialty";

/// Service used by HTTP handlers; the repository is chosen at startup.
pub type DynVetSpecialtyService = VetSpecialtyService<dyn VetSpecialtyRepository>;

/// Vet-specialty business service independent of web framework
pub struct VetSpecialtyService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: VetSpecialtyRepository + ?Sized> VetSpecialtyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a new association; fails with `Conflict` if the key is taken.
    ///
    /// The lookup only short-circuits the common case. Concurrent creates of the
    /// same key are settled by the repository's insert.
    ///
    /// # Examples
    /// ```
    /// use service::vet_specialty::{VetSpecialty, VetSpecialtyService, repository::mock::InMemoryVetSpecialtyRepository};
    /// use std::sync::Arc;
    /// let svc = VetSpecialtyService::new(Arc::new(InMemoryVetSpecialtyRepository::default()));
    /// let rec = VetSpecialty { vet_id: 1, specialty_id: 2, certification_date: None, years_experience: 3, is_primary: false, notes: None };
    /// let created = tokio_test::block_on(svc.create(rec.clone())).unwrap();
    /// assert_eq!(created, rec);
    /// assert!(tokio_test::block_on(svc.create(rec)).is_err());
    /// ```
    #[instrument(skip(self, record), fields(vet_id = record.vet_id, specialty_id = record.specialty_id))]
    pub async fn create(&self, record: VetSpecialty) -> Result<VetSpecialty, ServiceError> {
        validate(&record)?;
        if let Some(existing) = self.repo.get(record.vet_id, record.specialty_id).await? {
            debug!(vet_id = existing.vet_id, specialty_id = existing.specialty_id, "vet specialty exists");
            return Err(ServiceError::already_exists(ENTITY));
        }
        let created = self.repo.insert(record).await?;
        info!(vet_id = created.vet_id, specialty_id = created.specialty_id, "vet_specialty_created");
        Ok(created)
    }

    /// Look up one association by its composite key.
    pub async fn find_by_id(&self, vet_id: i32, specialty_id: i32) -> Result<VetSpecialty, ServiceError> {
        self.repo
            .get(vet_id, specialty_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Replace every attribute of the association identified by `record`'s key.
    ///
    /// # Examples
    /// ```
    /// use service::errors::ServiceError;
    /// use service::vet_specialty::{VetSpecialty, VetSpecialtyService, repository::mock::InMemoryVetSpecialtyRepository};
    /// use std::sync::Arc;
    /// let svc = VetSpecialtyService::new(Arc::new(InMemoryVetSpecialtyRepository::default()));
    /// let rec = VetSpecialty { vet_id: 9, specialty_id: 9, certification_date: None, years_experience: 1, is_primary: true, notes: None };
    /// let res = tokio_test::block_on(svc.update(rec));
    /// assert!(matches!(res, Err(ServiceError::NotFound(_))));
    /// ```
    #[instrument(skip(self, record), fields(vet_id = record.vet_id, specialty_id = record.specialty_id))]
    pub async fn update(&self, record: VetSpecialty) -> Result<VetSpecialty, ServiceError> {
        validate(&record)?;
        let updated = self
            .repo
            .replace(record)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(vet_id = updated.vet_id, specialty_id = updated.specialty_id, "vet_specialty_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, vet_id: i32, specialty_id: i32) -> Result<(), ServiceError> {
        if !self.repo.remove(vet_id, specialty_id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(vet_id, specialty_id, "vet_specialty_deleted");
        Ok(())
    }

    /// All specialties of a vet, ordered by specialty id.
    pub async fn find_by_vet_id(&self, vet_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> {
        self.repo.list_by_vet(vet_id).await
    }

    /// All vets holding a specialty, ordered by vet id.
    pub async fn find_by_specialty_id(&self, specialty_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> {
        self.repo.list_by_specialty(specialty_id).await
    }
}

fn validate(record: &VetSpecialty) -> Result<(), ServiceError> {
    models::vet_specialty::validate_key(record.vet_id, record.specialty_id)?;
    models::vet_specialty::validate_years_experience(record.years_experience)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vet_specialty::repository::mock::InMemoryVetSpecialtyRepository;
    use chrono::NaiveDate;

    fn rec(vet_id: i32, specialty_id: i32, years: i32) -> VetSpecialty {
        VetSpecialty {
            vet_id,
            specialty_id,
            certification_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            years_experience: years,
            is_primary: false,
            notes: None,
        }
    }

    fn service(seed: Vec<VetSpecialty>) -> VetSpecialtyService<InMemoryVetSpecialtyRepository> {
        VetSpecialtyService::new(Arc::new(InMemoryVetSpecialtyRepository::with_records(seed)))
    }

    #[tokio::test]
    async fn create_then_find_returns_same_values() {
        let svc = service(vec![]);
        let created = svc.create(rec(1, 2, 3)).await.unwrap();
        assert_eq!(created, rec(1, 2, 3));
        assert_eq!(svc.find_by_id(1, 2).await.unwrap(), rec(1, 2, 3));
    }

    #[tokio::test]
    async fn create_duplicate_is_conflict() {
        let svc = service(vec![rec(1, 2, 3)]);
        let err = svc.create(rec(1, 2, 5)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(svc.find_by_id(1, 2).await.unwrap().years_experience, 3);
    }

    /// Store whose lookups miss, as when another request inserts between `get` and `insert`.
    struct StaleLookups(InMemoryVetSpecialtyRepository);

    #[async_trait::async_trait]
    impl VetSpecialtyRepository for StaleLookups {
        async fn get(&self, _: i32, _: i32) -> Result<Option<VetSpecialty>, ServiceError> { Ok(None) }
        async fn insert(&self, record: VetSpecialty) -> Result<VetSpecialty, ServiceError> { self.0.insert(record).await }
        async fn replace(&self, record: VetSpecialty) -> Result<Option<VetSpecialty>, ServiceError> { self.0.replace(record).await }
        async fn remove(&self, vet_id: i32, specialty_id: i32) -> Result<bool, ServiceError> { self.0.remove(vet_id, specialty_id).await }
        async fn list_by_vet(&self, vet_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> { self.0.list_by_vet(vet_id).await }
        async fn list_by_specialty(&self, specialty_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> { self.0.list_by_specialty(specialty_id).await }
    }

    #[tokio::test]
    async fn create_conflict_detected_by_insert_when_lookup_misses() {
        let repo = StaleLookups(InMemoryVetSpecialtyRepository::with_records(vec![rec(1, 2, 3)]));
        let svc = VetSpecialtyService::new(Arc::new(repo));
        let err = svc.create(rec(1, 2, 5)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn create_rejects_negative_experience() {
        let svc = service(vec![]);
        let err = svc.create(rec(1, 2, -1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.find_by_vet_id(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let svc = service(vec![rec(1, 2, 3)]);
        assert!(matches!(svc.find_by_id(999, 999).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_all_attributes() {
        let svc = service(vec![rec(1, 2, 3)]);
        let mut changed = rec(1, 2, 7);
        changed.is_primary = true;
        changed.certification_date = None;
        changed.notes = Some("lead".into());
        assert_eq!(svc.update(changed.clone()).await.unwrap(), changed);
        assert_eq!(svc.find_by_id(1, 2).await.unwrap(), changed);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = service(vec![]);
        assert!(matches!(svc.update(rec(4, 4, 1)).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_is_not_found() {
        let svc = service(vec![rec(1, 2, 3)]);
        svc.delete(1, 2).await.unwrap();
        assert!(matches!(svc.find_by_id(1, 2).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(1, 2).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn lists_filter_by_each_side_of_the_key() {
        let svc = service(vec![rec(1, 1, 1), rec(1, 3, 1), rec(2, 1, 1), rec(3, 2, 1)]);

        let by_vet = svc.find_by_vet_id(1).await.unwrap();
        assert_eq!(by_vet.iter().map(VetSpecialty::key).collect::<Vec<_>>(), vec![(1, 1), (1, 3)]);

        let by_specialty = svc.find_by_specialty_id(1).await.unwrap();
        assert_eq!(by_specialty.iter().map(VetSpecialty::key).collect::<Vec<_>>(), vec![(1, 1), (2, 1)]);

        assert!(svc.find_by_vet_id(42).await.unwrap().is_empty());
        assert!(svc.find_by_specialty_id(42).await.unwrap().is_empty());
    }
}
