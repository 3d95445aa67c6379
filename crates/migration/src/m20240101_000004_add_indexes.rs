use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Signups: index on camper_id for the per-camper expansion and cascade
        manager
            .create_index(
                Index::create()
                    .name("idx_signup_camper")
                    .table(Signups::Table)
                    .col(Signups::CamperId)
                    .to_owned(),
            )
            .await?;

        // Signups: index on activity_id
        manager
            .create_index(
                Index::create()
                    .name("idx_signup_activity")
                    .table(Signups::Table)
                    .col(Signups::ActivityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_signup_camper").table(Signups::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_signup_activity").table(Signups::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Signups { Table, CamperId, ActivityId }
