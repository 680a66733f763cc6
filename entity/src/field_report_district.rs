use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "field_report_district")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub field_report_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub district_id: i32,
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
        belongs_to = "super::district::Entity",
        from = "Column::DistrictId",
        to = "super::district::Column::Id"
    )]
    District,
}

impl ActiveModelBehavior for ActiveModel {}
