use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DisasterType::Table)
                    .if_not_exists()
                    .col(pk_auto(DisasterType::Id))
                    .col(string(DisasterType::Name))
                    .col(text_null(DisasterType::Summary))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BeaconUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BeaconUser::Id))
                    .col(string_uniq(BeaconUser::Username))
                    .col(timestamp(BeaconUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeaconUser::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DisasterType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DisasterType {
    Table,
    Id,
    Name,
    Summary,
}

#[derive(DeriveIden)]
pub enum BeaconUser {
    Table,
    Id,
    Username,
    CreatedAt,
}
