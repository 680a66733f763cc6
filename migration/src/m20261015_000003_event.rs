use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261015_000001_geography::{Country, District, Region},
    m20261015_000002_disaster_type_and_user::DisasterType,
};

static FK_EVENT_DTYPE_ID: &str = "fk-event-dtype_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(integer(Event::DtypeId))
                    .col(timestamp_null(Event::DisasterStartDate))
                    .col(boolean(Event::AutoGenerated).default(false))
                    .col(string_null(Event::AutoGeneratedSource))
                    .col(timestamp(Event::CreatedAt))
                    .col(timestamp(Event::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_DTYPE_ID)
                            .from(Event::Table, Event::DtypeId)
                            .to(DisasterType::Table, DisasterType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventCountry::Table)
                    .if_not_exists()
                    .col(integer(EventCountry::EventId))
                    .col(integer(EventCountry::CountryId))
                    .primary_key(Index::create().col(EventCountry::EventId).col(EventCountry::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_country-event_id")
                            .from(EventCountry::Table, EventCountry::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_country-country_id")
                            .from(EventCountry::Table, EventCountry::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventRegion::Table)
                    .if_not_exists()
                    .col(integer(EventRegion::EventId))
                    .col(integer(EventRegion::RegionId))
                    .primary_key(Index::create().col(EventRegion::EventId).col(EventRegion::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_region-event_id")
                            .from(EventRegion::Table, EventRegion::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_region-region_id")
                            .from(EventRegion::Table, EventRegion::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventDistrict::Table)
                    .if_not_exists()
                    .col(integer(EventDistrict::EventId))
                    .col(integer(EventDistrict::DistrictId))
                    .primary_key(Index::create().col(EventDistrict::EventId).col(EventDistrict::DistrictId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_district-event_id")
                            .from(EventDistrict::Table, EventDistrict::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_district-district_id")
                            .from(EventDistrict::Table, EventDistrict::DistrictId)
                            .to(District::Table, District::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventDistrict::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventRegion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventCountry::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    DtypeId,
    DisasterStartDate,
    AutoGenerated,
    AutoGeneratedSource,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EventCountry {
    Table,
    EventId,
    CountryId,
}

#[derive(DeriveIden)]
enum EventRegion {
    Table,
    EventId,
    RegionId,
}

#[derive(DeriveIden)]
enum EventDistrict {
    Table,
    EventId,
    DistrictId,
}
