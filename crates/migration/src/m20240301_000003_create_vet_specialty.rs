//! Create `vet_specialties` table.
//! Association between vets and specialties keyed by (vet_id, specialty_id).
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240301_000001_create_vet::Vet;
use crate::m20240301_000002_create_specialty::Specialty;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VetSpecialty::Table)
                    .if_not_exists()
                    .col(integer(VetSpecialty::VetId))
                    .col(integer(VetSpecialty::SpecialtyId))
                    .col(date_null(VetSpecialty::CertificationDate))
                    .col(integer(VetSpecialty::YearsExperience).default(0))
                    .col(boolean(VetSpecialty::IsPrimary).default(false))
                    .col(text_null(VetSpecialty::Notes))
                    .primary_key(
                        Index::create()
                            .name("pk_vet_specialties")
                            .col(VetSpecialty::VetId)
                            .col(VetSpecialty::SpecialtyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_vet")
                            .from(VetSpecialty::Table, VetSpecialty::VetId)
                            .to(Vet::Table, Vet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_specialty")
                            .from(VetSpecialty::Table, VetSpecialty::SpecialtyId)
                            .to(Specialty::Table, Specialty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup by specialty; lookups by vet are served by the primary key prefix
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vet_specialties_specialty_id")
                    .table(VetSpecialty::Table)
                    .col(VetSpecialty::SpecialtyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(VetSpecialty::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum VetSpecialty {
    #[sea_orm(iden = "vet_specialties")]
    Table,
    VetId,
    SpecialtyId,
    CertificationDate,
    YearsExperience,
    IsPrimary,
    Notes,
}
