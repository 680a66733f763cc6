use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Who may see a field report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    #[sea_orm(num_value = 1)]
    Membership,
    #[sea_orm(num_value = 2)]
    Internal,
    #[sea_orm(num_value = 3)]
    Public,
}

/// Status of a request for an assistance type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum RequestChoice {
    #[default]
    #[sea_orm(num_value = 0)]
    No,
    #[sea_orm(num_value = 1)]
    Requested,
    #[sea_orm(num_value = 2)]
    Planned,
    #[sea_orm(num_value = 3)]
    Complete,
}

/// Origin of the epidemiological figures in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum EpiSource {
    #[sea_orm(num_value = 0)]
    MinistryOfHealth,
    #[sea_orm(num_value = 1)]
    Who,
    #[sea_orm(num_value = 2)]
    Other,
}
