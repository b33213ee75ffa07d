use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::vet_specialty::domain::VetSpecialty;
use crate::vet_specialty::repository::VetSpecialtyRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmVetSpecialtyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmVetSpecialtyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl VetSpecialtyRepository for SeaOrmVetSpecialtyRepository {
    async fn get(&self, vet_id: i32, specialty_id: i32) -> Result<Option<VetSpecialty>, ServiceError> {
        let found = models::vet_specialty::find(&self.db, vet_id, specialty_id).await?;
        Ok(found.map(VetSpecialty::from))
    }

    async fn insert(&self, record: VetSpecialty) -> Result<VetSpecialty, ServiceError> {
        let created = models::vet_specialty::create(&self.db, record.into()).await?;
        Ok(created.into())
    }

    async fn replace(&self, record: VetSpecialty) -> Result<Option<VetSpecialty>, ServiceError> {
        let updated = models::vet_specialty::replace(&self.db, record.into()).await?;
        Ok(updated.map(VetSpecialty::from))
    }

    async fn remove(&self, vet_id: i32, specialty_id: i32) -> Result<bool, ServiceError> {
        Ok(models::vet_specialty::delete(&self.db, vet_id, specialty_id).await?)
    }

    async fn list_by_vet(&self, vet_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> {
        let rows = models::vet_specialty::list_by_vet(&self.db, vet_id).await?;
        Ok(rows.into_iter().map(VetSpecialty::from).collect())
    }

    async fn list_by_specialty(&self, specialty_id: i32) -> Result<Vec<VetSpecialty>, ServiceError> {
        let rows = models::vet_specialty::list_by_specialty(&self.db, specialty_id).await?;
        Ok(rows.into_iter().map(VetSpecialty::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmVetSpecialtyRepository::new(get_db().await?);

        let seeded = repo.get(2, 1).await?.expect("seeded 2/1");
        assert_eq!(seeded.years_experience, 8);
        assert!(seeded.is_primary);

        let rec = VetSpecialty {
            vet_id: 6,
            specialty_id: 3,
            certification_date: None,
            years_experience: 2,
            is_primary: true,
            notes: Some("dental rotation".into()),
        };
        assert_eq!(repo.insert(rec.clone()).await?, rec);

        let mut changed = rec.clone();
        changed.years_experience = 9;
        assert_eq!(repo.replace(changed.clone()).await?, Some(changed.clone()));
        assert_eq!(repo.list_by_vet(6).await?, vec![changed]);

        assert!(repo.remove(6, 3).await?);
        assert!(!repo.remove(6, 3).await?);
        assert!(repo.get(6, 3).await?.is_none());

        let radiology: Vec<i32> = repo.list_by_specialty(1).await?.iter().map(|r| r.vet_id).collect();
        assert_eq!(radiology, vec![2, 5]);
        Ok(())
    }
}
