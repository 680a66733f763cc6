mod field_report;
mod geo;
mod location;
mod source_type;

use beacon_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::server::{
    data::field_report::FieldReportRepository,
    model::{db::FieldReportModel, ingest::ReportFields},
};

/// Inserts a submitter and a report owned by them with only the required fields set
async fn insert_report(test: &mut TestSetup) -> Result<FieldReportModel, TestError> {
    let (user, dtype) = test.reference().insert_submitter().await?;

    let fields = ReportFields {
        summary: Some("Flood X".to_string()),
        user_id: Some(user.id),
        dtype_id: Some(dtype.id),
        ..Default::default()
    };

    Ok(FieldReportRepository::new(&test.state.db)
        .create(fields)
        .await?)
}
