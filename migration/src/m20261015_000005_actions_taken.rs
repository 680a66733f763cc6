use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261015_000004_field_report::FieldReport;

static IDX_ACTIONS_TAKEN_FIELD_REPORT_ID: &str = "idx-actions_taken-field_report_id";
static FK_ACTIONS_TAKEN_FIELD_REPORT_ID: &str = "fk-actions_taken-field_report_id";
static FK_ACTIONS_TAKEN_ACTION_ACTIONS_TAKEN_ID: &str = "fk-actions_taken_action-actions_taken_id";
static FK_ACTIONS_TAKEN_ACTION_ACTION_ID: &str = "fk-actions_taken_action-action_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Action::Table)
                    .if_not_exists()
                    .col(pk_auto(Action::Id))
                    .col(string(Action::Name))
                    .col(string(Action::FieldReportTypes).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActionsTaken::Table)
                    .if_not_exists()
                    .col(pk_auto(ActionsTaken::Id))
                    .col(integer(ActionsTaken::FieldReportId))
                    .col(string_null(ActionsTaken::Organization))
                    .col(text_null(ActionsTaken::Summary))
                    .col(text_null(ActionsTaken::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACTIONS_TAKEN_FIELD_REPORT_ID)
                            .from(ActionsTaken::Table, ActionsTaken::FieldReportId)
                            .to(FieldReport::Table, FieldReport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIONS_TAKEN_FIELD_REPORT_ID)
                    .table(ActionsTaken::Table)
                    .col(ActionsTaken::FieldReportId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActionsTakenAction::Table)
                    .if_not_exists()
                    .col(integer(ActionsTakenAction::ActionsTakenId))
                    .col(integer(ActionsTakenAction::ActionId))
                    .primary_key(
                        Index::create()
                            .col(ActionsTakenAction::ActionsTakenId)
                            .col(ActionsTakenAction::ActionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACTIONS_TAKEN_ACTION_ACTIONS_TAKEN_ID)
                            .from(ActionsTakenAction::Table, ActionsTakenAction::ActionsTakenId)
                            .to(ActionsTaken::Table, ActionsTaken::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACTIONS_TAKEN_ACTION_ACTION_ID)
                            .from(ActionsTakenAction::Table, ActionsTakenAction::ActionId)
                            .to(Action::Table, Action::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionsTakenAction::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIONS_TAKEN_FIELD_REPORT_ID)
                    .table(ActionsTaken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ActionsTaken::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Action::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Action {
    Table,
    Id,
    Name,
    FieldReportTypes,
}

#[derive(DeriveIden)]
enum ActionsTaken {
    Table,
    Id,
    FieldReportId,
    Organization,
    Summary,
    Notes,
}

#[derive(DeriveIden)]
enum ActionsTakenAction {
    Table,
    ActionsTakenId,
    ActionId,
}
