use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261015_000001_geography::{Country, District, Region},
    m20261015_000002_disaster_type_and_user::{BeaconUser, DisasterType},
    m20261015_000003_event::Event,
};

static IDX_FIELD_REPORT_EVENT_ID: &str = "idx-field_report-event_id";
static FK_FIELD_REPORT_DTYPE_ID: &str = "fk-field_report-dtype_id";
static FK_FIELD_REPORT_USER_ID: &str = "fk-field_report-user_id";
static FK_FIELD_REPORT_EVENT_ID: &str = "fk-field_report-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(FieldReport::Table)
            .if_not_exists()
            .col(pk_auto(FieldReport::Id))
            .col(string(FieldReport::Summary))
            .col(text_null(FieldReport::Description))
            .col(timestamp_null(FieldReport::StartDate))
            .col(integer(FieldReport::DtypeId))
            .col(integer(FieldReport::UserId))
            .col(integer_null(FieldReport::EventId))
            .col(integer(FieldReport::Visibility).default(1));

        for figure in [
            FieldReport::NumInjured,
            FieldReport::NumDead,
            FieldReport::NumMissing,
            FieldReport::NumAffected,
            FieldReport::NumDisplaced,
            FieldReport::NumAssisted,
            FieldReport::NumLocalstaff,
            FieldReport::NumVolunteers,
            FieldReport::NumExpatsDelegates,
            FieldReport::GovNumDead,
            FieldReport::GovNumAffected,
            FieldReport::EpiCases,
            FieldReport::EpiSuspectedCases,
            FieldReport::EpiProbableCases,
            FieldReport::EpiConfirmedCases,
            FieldReport::EpiNumDead,
            FieldReport::DrefAmount,
            FieldReport::AppealAmount,
        ] {
            table.col(integer_null(figure));
        }

        table.col(integer_null(FieldReport::EpiFiguresSource));

        for request in [
            FieldReport::Bulletin,
            FieldReport::Dref,
            FieldReport::Appeal,
            FieldReport::Rdrt,
            FieldReport::Fact,
            FieldReport::IfrcStaff,
            FieldReport::ImminentDref,
            FieldReport::ForecastBasedAction,
            FieldReport::EruBaseCamp,
            FieldReport::EruBasicHealthCare,
            FieldReport::EruItTelecom,
            FieldReport::EruLogistics,
            FieldReport::EruDeploymentHospital,
            FieldReport::EruReferralHospital,
            FieldReport::EruRelief,
            FieldReport::EruWaterSanitation15,
            FieldReport::EruWaterSanitation40,
            FieldReport::EruWaterSanitation20,
        ] {
            table.col(integer(request).default(0));
        }

        table
            .col(text_null(FieldReport::ActionsOthers))
            .col(timestamp(FieldReport::CreatedAt))
            .col(timestamp(FieldReport::UpdatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name(FK_FIELD_REPORT_DTYPE_ID)
                    .from(FieldReport::Table, FieldReport::DtypeId)
                    .to(DisasterType::Table, DisasterType::Id),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_FIELD_REPORT_USER_ID)
                    .from(FieldReport::Table, FieldReport::UserId)
                    .to(BeaconUser::Table, BeaconUser::Id),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_FIELD_REPORT_EVENT_ID)
                    .from(FieldReport::Table, FieldReport::EventId)
                    .to(Event::Table, Event::Id)
                    .on_delete(ForeignKeyAction::SetNull),
            );

        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FIELD_REPORT_EVENT_ID)
                    .table(FieldReport::Table)
                    .col(FieldReport::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FieldReportCountry::Table)
                    .if_not_exists()
                    .col(integer(FieldReportCountry::FieldReportId))
                    .col(integer(FieldReportCountry::CountryId))
                    .primary_key(Index::create().col(FieldReportCountry::FieldReportId).col(FieldReportCountry::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-field_report_country-field_report_id")
                            .from(FieldReportCountry::Table, FieldReportCountry::FieldReportId)
                            .to(FieldReport::Table, FieldReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-field_report_country-country_id")
                            .from(FieldReportCountry::Table, FieldReportCountry::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FieldReportRegion::Table)
                    .if_not_exists()
                    .col(integer(FieldReportRegion::FieldReportId))
                    .col(integer(FieldReportRegion::RegionId))
                    .primary_key(Index::create().col(FieldReportRegion::FieldReportId).col(FieldReportRegion::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-field_report_region-field_report_id")
                            .from(FieldReportRegion::Table, FieldReportRegion::FieldReportId)
                            .to(FieldReport::Table, FieldReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-field_report_region-region_id")
                            .from(FieldReportRegion::Table, FieldReportRegion::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FieldReportDistrict::Table)
                    .if_not_exists()
                    .col(integer(FieldReportDistrict::FieldReportId))
                    .col(integer(FieldReportDistrict::DistrictId))
                    .primary_key(Index::create().col(FieldReportDistrict::FieldReportId).col(FieldReportDistrict::DistrictId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-field_report_district-field_report_id")
                            .from(FieldReportDistrict::Table, FieldReportDistrict::FieldReportId)
                            .to(FieldReport::Table, FieldReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-field_report_district-district_id")
                            .from(FieldReportDistrict::Table, FieldReportDistrict::DistrictId)
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
            .drop_table(Table::drop().table(FieldReportDistrict::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FieldReportRegion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FieldReportCountry::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FIELD_REPORT_EVENT_ID)
                    .table(FieldReport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FieldReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FieldReport {
    Table,
    Id,
    Summary,
    Description,
    StartDate,
    DtypeId,
    UserId,
    EventId,
    Visibility,
    NumInjured,
    NumDead,
    NumMissing,
    NumAffected,
    NumDisplaced,
    NumAssisted,
    NumLocalstaff,
    NumVolunteers,
    NumExpatsDelegates,
    GovNumDead,
    GovNumAffected,
    EpiCases,
    EpiSuspectedCases,
    EpiProbableCases,
    EpiConfirmedCases,
    EpiNumDead,
    EpiFiguresSource,
    Bulletin,
    Dref,
    Appeal,
    Rdrt,
    Fact,
    IfrcStaff,
    ImminentDref,
    ForecastBasedAction,
    EruBaseCamp,
    EruBasicHealthCare,
    EruItTelecom,
    EruLogistics,
    EruDeploymentHospital,
    EruReferralHospital,
    EruRelief,
    #[sea_orm(iden = "eru_water_sanitation_15")]
    EruWaterSanitation15,
    #[sea_orm(iden = "eru_water_sanitation_40")]
    EruWaterSanitation40,
    #[sea_orm(iden = "eru_water_sanitation_20")]
    EruWaterSanitation20,
    DrefAmount,
    AppealAmount,
    ActionsOthers,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FieldReportCountry {
    Table,
    FieldReportId,
    CountryId,
}

#[derive(DeriveIden)]
enum FieldReportRegion {
    Table,
    FieldReportId,
    RegionId,
}

#[derive(DeriveIden)]
enum FieldReportDistrict {
    Table,
    FieldReportId,
    DistrictId,
}
