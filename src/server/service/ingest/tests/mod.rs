mod expand_locations;
mod resolve;

use std::collections::BTreeSet;

use beacon_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::{json, Value};

use super::*;

use crate::server::{
    data::location::LocationRepository, error::ingest::SecondaryStep,
    service::ingest::resolve::RelationField,
};

fn decode(value: Value) -> FieldReportPayload {
    FieldReportPayload::decode(value).unwrap()
}

async fn stored_report(test: &TestSetup, id: i32) -> Result<entity::field_report::Model, TestError> {
    Ok(entity::prelude::FieldReport::find_by_id(id)
        .one(&test.state.db)
        .await?
        .unwrap())
}

async fn report_countries(test: &TestSetup, id: i32) -> Result<BTreeSet<i32>, TestError> {
    Ok(LocationRepository::new(&test.state.db)
        .country_ids(LocationOwner::FieldReport(id))
        .await?)
}

async fn report_regions(test: &TestSetup, id: i32) -> Result<BTreeSet<i32>, TestError> {
    Ok(LocationRepository::new(&test.state.db)
        .region_ids(LocationOwner::FieldReport(id))
        .await?)
}
