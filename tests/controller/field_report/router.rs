use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use beacon::server::{model::app::AppState, router::routes};
use serde_json::json;
use tower::ServiceExt;

use super::*;

fn raw_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expect POST then PUT through the router to return 201 and 200 for the same report
#[tokio::test]
async fn creates_and_updates_through_router() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let resp = routes()
        .with_state(test.state::<AppState>())
        .oneshot(json_request(
            "POST",
            "/api/field-report",
            &payload::minimal(user.id, dtype.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = routes()
        .with_state(test.state::<AppState>())
        .oneshot(json_request(
            "PUT",
            &format!("/api/field-report/{}", id),
            &json!({ "visibility": "public", "user": user.id, "dtype": dtype.id }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["id"].as_i64(), Some(id));

    Ok(())
}

/// Expect 400 with an error code when the summary is missing
#[tokio::test]
async fn rejects_missing_summary_through_router() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let resp = routes()
        .with_state(test.state::<AppState>())
        .oneshot(json_request(
            "POST",
            "/api/field-report",
            &payload::without(payload::minimal(user.id, dtype.id), "summary"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("validation_error"));
    assert_eq!(body.field.as_deref(), Some("summary"));

    Ok(())
}

/// Expect 404 when patching a report that does not exist
#[tokio::test]
async fn returns_not_found_through_router() -> Result<(), TestError> {
    let test = test_setup_with_ingest_tables!()?;

    let resp = routes()
        .with_state(test.state::<AppState>())
        .oneshot(json_request(
            "PATCH",
            "/api/field-report/77",
            &json!({ "summary": "Flood X" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect malformed JSON to be answered with a validation error body
#[tokio::test]
async fn rejects_malformed_json_through_router() -> Result<(), TestError> {
    let test = test_setup_with_ingest_tables!()?;

    let resp = routes()
        .with_state(test.state::<AppState>())
        .oneshot(raw_request("POST", "/api/field-report", "{ \"summary\": "))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = error_body(resp).await;
    assert_eq!(body.code.as_deref(), Some("validation_error"));
    assert_eq!(body.field, None);

    Ok(())
}

/// Expect the OpenAPI document to describe both field report paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = routes()
        .with_state(test.state::<AppState>())
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let document = json_body(resp).await;
    assert!(document["paths"]["/api/field-report"]["post"].is_object());
    assert!(document["paths"]["/api/field-report/{id}"]["put"].is_object());
    assert!(document["paths"]["/api/field-report/{id}"]["patch"].is_object());

    Ok(())
}
