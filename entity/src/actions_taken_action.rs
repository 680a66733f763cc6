use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actions_taken_action")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub actions_taken_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub action_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::actions_taken::Entity",
        from = "Column::ActionsTakenId",
        to = "super::actions_taken::Column::Id",
        on_delete = "Cascade"
    )]
    ActionsTaken,
    #[sea_orm(
        belongs_to = "super::action::Entity",
        from = "Column::ActionId",
        to = "super::action::Column::Id"
    )]
    Action,
}

impl Related<super::actions_taken::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActionsTaken.def()
    }
}

impl Related<super::action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Action.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
