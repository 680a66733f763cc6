use sea_orm_migration::{prelude::*, schema::*};

static IDX_COUNTRY_REGION_ID: &str = "idx-country-region_id";
static IDX_DISTRICT_COUNTRY_ID: &str = "idx-district-country_id";
static FK_COUNTRY_REGION_ID: &str = "fk-country-region_id";
static FK_DISTRICT_COUNTRY_ID: &str = "fk-district-country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .if_not_exists()
                    .col(pk_auto(Region::Id))
                    .col(string(Region::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(pk_auto(Country::Id))
                    .col(string(Country::Name))
                    .col(string_null(Country::Iso))
                    .col(integer_null(Country::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COUNTRY_REGION_ID)
                            .from(Country::Table, Country::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_REGION_ID)
                    .table(Country::Table)
                    .col(Country::RegionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(District::Table)
                    .if_not_exists()
                    .col(pk_auto(District::Id))
                    .col(string(District::Name))
                    .col(integer(District::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DISTRICT_COUNTRY_ID)
                            .from(District::Table, District::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISTRICT_COUNTRY_ID)
                    .table(District::Table)
                    .col(District::CountryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(District::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Region::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Region {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Country {
    Table,
    Id,
    Name,
    Iso,
    RegionId,
}

#[derive(DeriveIden)]
pub enum District {
    Table,
    Id,
    Name,
    CountryId,
}
