use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, FieldReportIdDto},
        field_report::FieldReportPayload,
    },
    server::{
        error::{ingest::IngestError, Error},
        model::app::AppState,
        service::ingest::IngestService,
    },
};

pub static FIELD_REPORT_TAG: &str = "field_report";

/// Submit a new field report
///
/// Stores the report and, on a best-effort basis, its locations, actions taken, contacts and
/// sources. A report submitted without an `event` is linked to a newly created event. Failures
/// writing the secondary records are logged and do not change the response.
#[utoipa::path(
    post,
    path = "/api/field-report",
    tag = FIELD_REPORT_TAG,
    request_body = FieldReportPayload,
    responses(
        (status = 201, description = "Field report created", body = FieldReportIdDto),
        (status = 400, description = "Invalid submission or unknown referenced record", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_field_report(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let payload = decode(body)?;

    let outcome = IngestService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(FieldReportIdDto { id: outcome.id }),
    ))
}

/// Replace an existing field report
///
/// Scalars absent from the submission keep their stored values. Locations, actions taken,
/// contacts and sources are replaced by the submitted ones.
#[utoipa::path(
    put,
    path = "/api/field-report/{id}",
    tag = FIELD_REPORT_TAG,
    params(("id" = i32, Path, description = "ID of the field report")),
    request_body = FieldReportPayload,
    responses(
        (status = 200, description = "Field report updated", body = FieldReportIdDto),
        (status = 400, description = "Invalid submission or unknown referenced record", body = ErrorDto),
        (status = 404, description = "Field report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_field_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    update(&state, id, body).await
}

/// Partially update an existing field report
///
/// Behaves exactly like `PUT`; it is provided for clients that send only changed fields.
#[utoipa::path(
    patch,
    path = "/api/field-report/{id}",
    tag = FIELD_REPORT_TAG,
    params(("id" = i32, Path, description = "ID of the field report")),
    request_body = FieldReportPayload,
    responses(
        (status = 200, description = "Field report updated", body = FieldReportIdDto),
        (status = 400, description = "Invalid submission or unknown referenced record", body = ErrorDto),
        (status = 404, description = "Field report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn partial_update_field_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    update(&state, id, body).await
}

async fn update(
    state: &AppState,
    id: i32,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let payload = decode(body)?;

    let outcome = IngestService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(FieldReportIdDto { id: outcome.id })))
}

/// Decodes a request body, reporting unreadable JSON the same way as an invalid submission.
fn decode(body: Result<Json<Value>, JsonRejection>) -> Result<FieldReportPayload, IngestError> {
    let Json(body) = body?;

    Ok(FieldReportPayload::decode(body)?)
}
