use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "field_report_contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub field_report_id: i32,
    /// Role of the contact within the response, e.g. `Originator` or `Federation`
    pub ctype: String,
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
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
}

impl Related<super::field_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
