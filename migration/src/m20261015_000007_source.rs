use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261015_000004_field_report::FieldReport;

static IDX_SOURCE_FIELD_REPORT_ID: &str = "idx-source-field_report_id";
static FK_SOURCE_FIELD_REPORT_ID: &str = "fk-source-field_report_id";
static FK_SOURCE_STYPE_ID: &str = "fk-source-stype_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Unique name backs the insert-or-reread lookup of source types
        manager
            .create_table(
                Table::create()
                    .table(SourceType::Table)
                    .if_not_exists()
                    .col(pk_auto(SourceType::Id))
                    .col(string_uniq(SourceType::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Source::Table)
                    .if_not_exists()
                    .col(pk_auto(Source::Id))
                    .col(integer(Source::FieldReportId))
                    .col(integer(Source::StypeId))
                    .col(text_null(Source::Spec))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOURCE_FIELD_REPORT_ID)
                            .from(Source::Table, Source::FieldReportId)
                            .to(FieldReport::Table, FieldReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOURCE_STYPE_ID)
                            .from(Source::Table, Source::StypeId)
                            .to(SourceType::Table, SourceType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOURCE_FIELD_REPORT_ID)
                    .table(Source::Table)
                    .col(Source::FieldReportId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOURCE_FIELD_REPORT_ID)
                    .table(Source::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Source::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SourceType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SourceType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Source {
    Table,
    Id,
    FieldReportId,
    StypeId,
    Spec,
}
