use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use beacon::server::{
    controller::field_report::{
        create_field_report, partial_update_field_report, update_field_report,
    },
    model::app::AppState,
};
use sea_orm::EntityTrait;
use serde_json::json;

use super::*;

async fn create_report(test: &TestSetup, payload: Value) -> i32 {
    let resp = create_field_report(State(test.state::<AppState>()), Ok(Json(payload)))
        .await
        .unwrap()
        .into_response();

    json_body(resp).await["id"].as_i64().unwrap() as i32
}

/// Expect 200 OK and the stored summary replaced
#[tokio::test]
async fn returns_ok_and_updates_summary() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let id = create_report(&test, payload::minimal(user.id, dtype.id)).await;

    let result = update_field_report(
        State(test.state::<AppState>()),
        Path(id),
        Ok(Json(json!({
            "summary": "Flood X, revised",
            "user": user.id,
            "dtype": dtype.id,
        }))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let report = entity::prelude::FieldReport::find_by_id(id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(report.summary, "Flood X, revised");
    assert_eq!(report.user_id, user.id);

    Ok(())
}

/// Expect PATCH to replace contacts the same way PUT does
#[tokio::test]
async fn partial_update_replaces_contacts() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let id = create_report(
        &test,
        payload::with(
            payload::minimal(user.id, dtype.id),
            json!({ "contacts": [{ "ctype": "Originator", "name": "Ana" }] }),
        ),
    )
    .await;

    let result = partial_update_field_report(
        State(test.state::<AppState>()),
        Path(id),
        Ok(Json(json!({
            "user": user.id,
            "dtype": dtype.id,
            "contacts": [{ "ctype": "Federation", "name": "Ben" }],
        }))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let contacts = entity::prelude::FieldReportContact::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ben");

    Ok(())
}

/// Expect 404 Not Found for a report that does not exist
#[tokio::test]
async fn returns_not_found_for_unknown_report() -> Result<(), TestError> {
    let test = test_setup_with_ingest_tables!()?;

    let result = update_field_report(
        State(test.state::<AppState>()),
        Path(4242),
        Ok(Json(json!({ "summary": "Flood X" }))),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("report_not_found"));

    Ok(())
}

/// Expect 400 Bad Request naming `dtype` when an update nulls the disaster type
#[tokio::test]
async fn rejects_update_with_null_disaster_type() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let id = create_report(&test, payload::minimal(user.id, dtype.id)).await;

    let result = update_field_report(
        State(test.state::<AppState>()),
        Path(id),
        Ok(Json(json!({ "summary": "Flood X", "user": user.id, "dtype": null }))),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("missing_required_relation"));
    assert_eq!(body.field.as_deref(), Some("dtype"));

    Ok(())
}
