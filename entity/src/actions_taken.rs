use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actions_taken")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub field_report_id: i32,
    pub organization: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::field_report::Entity",
        from = "Column::FieldReportId",
        to = "super::field_report::Column::Id",
        on_delete = "Cascade"
    )]
    FieldReport,
    #[sea_orm(has_many = "super::actions_taken_action::Entity")]
    ActionsTakenAction,
}

impl Related<super::field_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldReport.def()
    }
}

impl Related<super::action::Entity> for Entity {
    fn to() -> RelationDef {
        super::actions_taken_action::Relation::Action.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::actions_taken_action::Relation::ActionsTaken.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
