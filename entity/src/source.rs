use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "source")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub field_report_id: i32,
    pub stype_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub spec: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::source_type::Entity",
        from = "Column::StypeId",
        to = "super::source_type::Column::Id"
    )]
    SourceType,
}

impl Related<super::field_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldReport.def()
    }
}

impl Related<super::source_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SourceType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
