//! Seed the reference vets and specialties plus their initial associations.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_VETS: &str = "INSERT INTO vets (id, first_name, last_name) VALUES \
    (1, 'James', 'Carter'), \
    (2, 'Helen', 'Leary'), \
    (3, 'Linda', 'Douglas'), \
    (4, 'Rafael', 'Ortega'), \
    (5, 'Henry', 'Stevens'), \
    (6, 'Sharon', 'Jenkins')";

const SEED_SPECIALTIES: &str = "INSERT INTO specialties (id, name) VALUES \
    (1, 'radiology'), \
    (2, 'surgery'), \
    (3, 'dentistry')";

const SEED_VET_SPECIALTIES: &str = "INSERT INTO vet_specialties \
    (vet_id, specialty_id, certification_date, years_experience, is_primary, notes) VALUES \
    (2, 1, '2016-03-10', 8, TRUE, 'Board certified in diagnostic imaging'), \
    (3, 2, '2018-07-22', 5, TRUE, 'Soft tissue surgery'), \
    (3, 3, '2020-01-15', 3, FALSE, NULL), \
    (4, 2, '2012-11-05', 12, TRUE, 'Orthopedic surgery lead'), \
    (5, 1, '2019-09-30', 6, TRUE, NULL)";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SEED_VETS).await?;
        db.execute_unprepared(SEED_SPECIALTIES).await?;
        db.execute_unprepared(SEED_VET_SPECIALTIES).await?;

        // Explicit ids bypass the serial sequences on Postgres
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            db.execute_unprepared("SELECT setval(pg_get_serial_sequence('vets', 'id'), (SELECT MAX(id) FROM vets))").await?;
            db.execute_unprepared("SELECT setval(pg_get_serial_sequence('specialties', 'id'), (SELECT MAX(id) FROM specialties))").await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DELETE FROM vet_specialties WHERE vet_id BETWEEN 1 AND 6").await?;
        db.execute_unprepared("DELETE FROM specialties WHERE id BETWEEN 1 AND 3").await?;
        db.execute_unprepared("DELETE FROM vets WHERE id BETWEEN 1 AND 6").await?;
        Ok(())
    }
}
