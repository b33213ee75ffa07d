//! Migrator registering entity-specific migrations in dependency order.
//! Seed data is applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_vet;
mod m20240301_000002_create_specialty;
mod m20240301_000003_create_vet_specialty;
mod m20240301_000004_seed_clinic_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_vet::Migration),
            Box::new(m20240301_000002_create_specialty::Migration),
            Box::new(m20240301_000003_create_vet_specialty::Migration),
            // Seed rows reference all three tables
            Box::new(m20240301_000004_seed_clinic_data::Migration),
        ]
    }
}
