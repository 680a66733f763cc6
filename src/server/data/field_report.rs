use chrono::Utc;
use entity::choice::RequestChoice;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    model::field_report::RequestField,
    server::model::{db::FieldReportModel, ingest::ReportFields},
};

/// Copies each listed figure onto the active model when it was submitted.
macro_rules! set_submitted {
    ($active:ident, $figures:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $figures.$field {
                $active.$field = ActiveValue::Set(Some(value));
            }
        )+
    };
}

pub struct FieldReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FieldReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new field report.
    ///
    /// Every request status starts at [`RequestChoice::No`]; submitted statuses are then applied
    /// on top. `summary`, `user_id` and `dtype_id` must be present or the insert is rejected.
    pub async fn create(&self, fields: ReportFields) -> Result<FieldReportModel, DbErr> {
        let now = Utc::now().naive_utc();

        let mut report = entity::field_report::ActiveModel {
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        for field in RequestField::ALL {
            set_request(&mut report, field, RequestChoice::No);
        }
        apply_fields(&mut report, fields);

        report.insert(self.db).await
    }

    /// Writes the submitted fields onto an existing report, leaving absent fields unchanged.
    pub async fn update(
        &self,
        existing: FieldReportModel,
        fields: ReportFields,
    ) -> Result<FieldReportModel, DbErr> {
        let mut report: entity::field_report::ActiveModel = existing.into();
        apply_fields(&mut report, fields);
        report.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        report.update(self.db).await
    }

    /// Points a report at an event without touching any other column.
    pub async fn set_event(&self, report_id: i32, event_id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::FieldReport::update_many()
            .col_expr(entity::field_report::Column::EventId, Expr::value(event_id))
            .filter(entity::field_report::Column::Id.eq(report_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "field report ID {}",
                report_id
            )));
        }

        Ok(())
    }

    pub async fn get_by_id(&self, report_id: i32) -> Result<Option<FieldReportModel>, DbErr> {
        entity::prelude::FieldReport::find_by_id(report_id)
            .one(self.db)
            .await
    }
}

fn apply_fields(report: &mut entity::field_report::ActiveModel, fields: ReportFields) {
    if let Some(summary) = fields.summary {
        report.summary = ActiveValue::Set(summary);
    }
    if let Some(description) = fields.description {
        report.description = ActiveValue::Set(Some(description));
    }
    if let Some(start_date) = fields.start_date {
        report.start_date = ActiveValue::Set(Some(start_date));
    }
    if let Some(actions_others) = fields.actions_others {
        report.actions_others = ActiveValue::Set(Some(actions_others));
    }
    if let Some(user_id) = fields.user_id {
        report.user_id = ActiveValue::Set(user_id);
    }
    if let Some(dtype_id) = fields.dtype_id {
        report.dtype_id = ActiveValue::Set(dtype_id);
    }
    if let Some(event_id) = fields.event_id {
        report.event_id = ActiveValue::Set(Some(event_id));
    }

    report.visibility = ActiveValue::Set(fields.visibility);
    report.epi_figures_source = ActiveValue::Set(fields.epi_figures_source);

    for (field, choice) in fields.requests {
        set_request(report, field, choice);
    }

    let figures = fields.figures;
    set_submitted!(
        report,
        figures,
        num_injured,
        num_dead,
        num_missing,
        num_affected,
        num_displaced,
        num_assisted,
        num_localstaff,
        num_volunteers,
        num_expats_delegates,
        gov_num_dead,
        gov_num_affected,
        epi_cases,
        epi_suspected_cases,
        epi_probable_cases,
        epi_confirmed_cases,
        epi_num_dead,
        dref_amount,
        appeal_amount,
    );
}

fn set_request(
    report: &mut entity::field_report::ActiveModel,
    field: RequestField,
    choice: RequestChoice,
) {
    let value = ActiveValue::Set(choice);

    match field {
        RequestField::Bulletin => report.bulletin = value,
        RequestField::Dref => report.dref = value,
        RequestField::Appeal => report.appeal = value,
        RequestField::Rdrt => report.rdrt = value,
        RequestField::Fact => report.fact = value,
        RequestField::IfrcStaff => report.ifrc_staff = value,
        RequestField::ImminentDref => report.imminent_dref = value,
        RequestField::ForecastBasedAction => report.forecast_based_action = value,
        RequestField::EruBaseCamp => report.eru_base_camp = value,
        RequestField::EruBasicHealthCare => report.eru_basic_health_care = value,
        RequestField::EruItTelecom => report.eru_it_telecom = value,
        RequestField::EruLogistics => report.eru_logistics = value,
        RequestField::EruDeploymentHospital => report.eru_deployment_hospital = value,
        RequestField::EruReferralHospital => report.eru_referral_hospital = value,
        RequestField::EruRelief => report.eru_relief = value,
        RequestField::EruWaterSanitation15 => report.eru_water_sanitation_15 = value,
        RequestField::EruWaterSanitation40 => report.eru_water_sanitation_40 = value,
        RequestField::EruWaterSanitation20 => report.eru_water_sanitation_20 = value,
    }
}
