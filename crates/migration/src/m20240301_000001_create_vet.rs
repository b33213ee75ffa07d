//! Create `vets` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vet::Table)
                    .if_not_exists()
                    .col(pk_auto(Vet::Id))
                    .col(string_len(Vet::FirstName, 30))
                    .col(string_len(Vet::LastName, 30))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vets_last_name")
                    .table(Vet::Table)
                    .col(Vet::LastName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Vet {
    #[sea_orm(iden = "vets")]
    Table,
    Id,
    FirstName,
    LastName,
}
