//! Create `campers` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campers::Table)
                    .if_not_exists()
                    .col(pk_auto(Campers::Id))
                    .col(string(Campers::Name))
                    .col(integer(Campers::Age))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Campers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Campers { Table, Id, Name, Age }
