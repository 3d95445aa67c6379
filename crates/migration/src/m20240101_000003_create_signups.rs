//! Create `signups` table with FKs to `campers` and `activities`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signups::Table)
                    .if_not_exists()
                    .col(pk_auto(Signups::Id))
                    .col(integer(Signups::CamperId))
                    .col(integer(Signups::ActivityId))
                    .col(integer(Signups::Time))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signup_camper")
                            .from(Signups::Table, Signups::CamperId)
                            .to(Campers::Table, Campers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signup_activity")
                            .from(Signups::Table, Signups::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Signups::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Signups { Table, Id, CamperId, ActivityId, Time }

#[derive(DeriveIden)]
enum Campers { Table, Id }

#[derive(DeriveIden)]
enum Activities { Table, Id }
