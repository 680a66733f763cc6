use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub dtype_id: i32,
    pub disaster_start_date: Option<DateTime>,
    pub auto_generated: bool,
    pub auto_generated_source: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::disaster_type::Entity",
        from = "Column::DtypeId",
        to = "super::disaster_type::Column::Id"
    )]
    DisasterType,
    #[sea_orm(has_many = "super::field_report::Entity")]
    FieldReport,
}

impl Related<super::disaster_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisasterType.def()
    }
}

impl Related<super::field_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
