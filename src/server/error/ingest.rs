use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::InternalServerError,
        service::ingest::{resolve::RelationField, IngestStage},
    },
};

/// Failures that abort a field report ingestion.
///
/// Every variant is raised before or while committing the report itself, so nothing is
/// persisted when one of these is returned.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The submission could not be decoded or is missing a required scalar.
    #[error("Invalid field report: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },
    #[error("Missing required field `{}`", .0.key())]
    MissingRequiredRelation(RelationField),
    #[error("No {} exists with ID {id}", .field.entity_name())]
    RelationNotFound { field: RelationField, id: i32 },
    #[error("Field report ID {0} does not exist")]
    ReportNotFound(i32),
    /// The report row itself could not be inserted or updated.
    #[error("Failed to save field report: {0}")]
    PrimaryWrite(#[source] DbErr),
    /// A read needed to validate the submission failed.
    #[error("Database error while {stage}: {source}")]
    Storage {
        stage: IngestStage,
        #[source]
        source: DbErr,
    },
}

impl IngestError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    /// Pipeline stage the ingestion was in when it aborted.
    pub fn stage(&self) -> IngestStage {
        match self {
            Self::Validation { .. }
            | Self::MissingRequiredRelation(_)
            | Self::RelationNotFound { .. }
            | Self::ReportNotFound(_) => IngestStage::Resolving,
            Self::PrimaryWrite(_) => IngestStage::CommitPrimary,
            Self::Storage { stage, .. } => *stage,
        }
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            field: None,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for IngestError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            field: None,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        if !matches!(self, Self::Storage { .. }) {
            tracing::debug!("Rejected field report submission: {}", message);
        }

        let (status, body) = match self {
            Self::Validation { field, .. } => {
                let body = ErrorDto::new(message).with_code("validation_error");
                let body = match field {
                    Some(field) => body.with_field(&field),
                    None => body,
                };

                (StatusCode::BAD_REQUEST, body)
            }
            Self::MissingRequiredRelation(field) => (
                StatusCode::BAD_REQUEST,
                ErrorDto::new(message)
                    .with_code("missing_required_relation")
                    .with_field(field.key()),
            ),
            Self::RelationNotFound { field, .. } => (
                StatusCode::BAD_REQUEST,
                ErrorDto::new(message)
                    .with_code("relation_not_found")
                    .with_field(field.key()),
            ),
            Self::ReportNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorDto::new(message).with_code("report_not_found"),
            ),
            Self::PrimaryWrite(err) => {
                tracing::error!("Failed to save field report: {}", err);

                (
                    StatusCode::BAD_REQUEST,
                    ErrorDto::new("Field report could not be saved").with_code("primary_write_failed"),
                )
            }
            err @ Self::Storage { .. } => return InternalServerError(err).into_response(),
        };

        (status, Json(body)).into_response()
    }
}

/// Secondary write of an ingestion that may fail without failing the ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryStep {
    Locations,
    ActionsTaken,
    Contacts,
    Sources,
    EventLink,
    EventLocations,
}

impl SecondaryStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::ActionsTaken => "actions_taken",
            Self::Contacts => "contacts",
            Self::Sources => "sources",
            Self::EventLink => "event_link",
            Self::EventLocations => "event_locations",
        }
    }
}

impl fmt::Display for SecondaryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed secondary write; collected by the orchestrator and logged, never returned to clients.
#[derive(Error, Debug)]
#[error("Failed to write {step} for field report ID {report_id}: {source}")]
pub struct RelationWriteError {
    pub step: SecondaryStep,
    pub report_id: i32,
    #[source]
    pub source: DbErr,
}

impl RelationWriteError {
    pub fn new(step: SecondaryStep, report_id: i32, source: DbErr) -> Self {
        Self {
            step,
            report_id,
            source,
        }
    }
}
