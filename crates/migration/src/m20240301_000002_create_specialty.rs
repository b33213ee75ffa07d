//! Create `specialties` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specialty::Table)
                    .if_not_exists()
                    .col(pk_auto(Specialty::Id))
                    .col(string_len(Specialty::Name, 80).unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Specialty::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Specialty {
    #[sea_orm(iden = "specialties")]
    Table,
    Id,
    Name,
}
