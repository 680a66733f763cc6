use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use beacon::server::{controller::field_report::create_field_report, model::app::AppState};
use sea_orm::EntityTrait;
use serde_json::json;

use super::*;

/// Expect 201 Created with the new report's ID
#[tokio::test]
async fn returns_created_with_report_id() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let result = create_field_report(
        State(test.state::<AppState>()),
        Ok(Json(payload::minimal(user.id, dtype.id))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = json_body(resp).await;
    let id = body["id"].as_i64().unwrap() as i32;

    let report = entity::prelude::FieldReport::find_by_id(id)
        .one(&test.state.db)
        .await?;
    assert!(report.is_some());

    Ok(())
}

/// Expect 201 Created even when a secondary write fails
#[tokio::test]
async fn returns_created_when_contacts_cannot_be_written() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ingest_tables()
        .without_table(entity::prelude::FieldReportContact)
        .build()
        .await?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let payload = payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "contacts": [{ "ctype": "Originator", "name": "Ana" }] }),
    );

    let result = create_field_report(State(test.state::<AppState>()), Ok(Json(payload))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let reports = entity::prelude::FieldReport::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(reports.len(), 1);

    Ok(())
}

/// Expect 400 Bad Request naming `dtype` when the disaster type does not exist
#[tokio::test]
async fn rejects_unknown_disaster_type() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let user = test.reference().insert_user().await?;

    let result = create_field_report(
        State(test.state::<AppState>()),
        Ok(Json(payload::minimal(user.id, 9999))),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("relation_not_found"));
    assert_eq!(body.field.as_deref(), Some("dtype"));

    let reports = entity::prelude::FieldReport::find()
        .all(&test.state.db)
        .await?;
    assert!(reports.is_empty());

    Ok(())
}

/// Expect 400 Bad Request naming `user` when the submitter is missing
#[tokio::test]
async fn rejects_missing_user() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let payload = payload::without(payload::minimal(user.id, dtype.id), "user");

    let result = create_field_report(State(test.state::<AppState>()), Ok(Json(payload))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("missing_required_relation"));
    assert_eq!(body.field.as_deref(), Some("user"));

    Ok(())
}

/// Expect 400 Bad Request when a nested collection has the wrong shape
#[tokio::test]
async fn rejects_malformed_contacts() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let payload = payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "contacts": "Ana" }),
    );

    let result = create_field_report(State(test.state::<AppState>()), Ok(Json(payload))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("validation_error"));

    Ok(())
}

/// Expect 400 Bad Request when the report row cannot be written
#[tokio::test]
async fn rejects_when_report_cannot_be_saved() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ingest_tables()
        .without_table(entity::prelude::FieldReport)
        .build()
        .await?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let result = create_field_report(
        State(test.state::<AppState>()),
        Ok(Json(payload::minimal(user.id, dtype.id))),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("primary_write_failed"));

    Ok(())
}
