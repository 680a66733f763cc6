use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261015_000004_field_report::FieldReport;

static IDX_FIELD_REPORT_CONTACT_FIELD_REPORT_ID: &str = "idx-field_report_contact-field_report_id";
static FK_FIELD_REPORT_CONTACT_FIELD_REPORT_ID: &str = "fk-field_report_contact-field_report_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FieldReportContact::Table)
                    .if_not_exists()
                    .col(pk_auto(FieldReportContact::Id))
                    .col(integer(FieldReportContact::FieldReportId))
                    .col(string(FieldReportContact::Ctype))
                    .col(string(FieldReportContact::Name))
                    .col(string_null(FieldReportContact::Title))
                    .col(string_null(FieldReportContact::Email))
                    .col(string_null(FieldReportContact::Phone))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FIELD_REPORT_CONTACT_FIELD_REPORT_ID)
                            .from(FieldReportContact::Table, FieldReportContact::FieldReportId)
                            .to(FieldReport::Table, FieldReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FIELD_REPORT_CONTACT_FIELD_REPORT_ID)
                    .table(FieldReportContact::Table)
                    .col(FieldReportContact::FieldReportId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FIELD_REPORT_CONTACT_FIELD_REPORT_ID)
                    .table(FieldReportContact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FieldReportContact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FieldReportContact {
    Table,
    Id,
    FieldReportId,
    Ctype,
    Name,
    Title,
    Email,
    Phone,
}
