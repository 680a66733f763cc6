use sea_orm::entity::prelude::*;

use crate::choice::{EpiSource, RequestChoice, Visibility};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "field_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub summary: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: Option<DateTime>,
    pub dtype_id: i32,
    pub user_id: i32,
    pub event_id: Option<i32>,
    pub visibility: Visibility,

    pub num_injured: Option<i32>,
    pub num_dead: Option<i32>,
    pub num_missing: Option<i32>,
    pub num_affected: Option<i32>,
    pub num_displaced: Option<i32>,
    pub num_assisted: Option<i32>,
    pub num_localstaff: Option<i32>,
    pub num_volunteers: Option<i32>,
    pub num_expats_delegates: Option<i32>,
    pub gov_num_dead: Option<i32>,
    pub gov_num_affected: Option<i32>,
    pub epi_cases: Option<i32>,
    pub epi_suspected_cases: Option<i32>,
    pub epi_probable_cases: Option<i32>,
    pub epi_confirmed_cases: Option<i32>,
    pub epi_num_dead: Option<i32>,
    pub epi_figures_source: Option<EpiSource>,

    pub bulletin: RequestChoice,
    pub dref: RequestChoice,
    pub dref_amount: Option<i32>,
    pub appeal: RequestChoice,
    pub appeal_amount: Option<i32>,
    pub rdrt: RequestChoice,
    pub fact: RequestChoice,
    pub ifrc_staff: RequestChoice,
    pub imminent_dref: RequestChoice,
    pub forecast_based_action: RequestChoice,
    pub eru_base_camp: RequestChoice,
    pub eru_basic_health_care: RequestChoice,
    pub eru_it_telecom: RequestChoice,
    pub eru_logistics: RequestChoice,
    pub eru_deployment_hospital: RequestChoice,
    pub eru_referral_hospital: RequestChoice,
    pub eru_relief: RequestChoice,
    pub eru_water_sanitation_15: RequestChoice,
    pub eru_water_sanitation_40: RequestChoice,
    pub eru_water_sanitation_20: RequestChoice,

    #[sea_orm(column_type = "Text", nullable)]
    pub actions_others: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::beacon_user::Entity",
        from = "Column::UserId",
        to = "super::beacon_user::Column::Id"
    )]
    BeaconUser,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
    #[sea_orm(has_many = "super::actions_taken::Entity")]
    ActionsTaken,
    #[sea_orm(has_many = "super::field_report_contact::Entity")]
    FieldReportContact,
    #[sea_orm(has_many = "super::source::Entity")]
    Source,
}

impl Related<super::disaster_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisasterType.def()
    }
}

impl Related<super::beacon_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeaconUser.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::actions_taken::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActionsTaken.def()
    }
}

impl Related<super::field_report_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldReportContact.def()
    }
}

impl Related<super::source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
