//! Error types for the Beacon server application.
//!
//! Domain errors (configuration, ingestion) are defined in their own modules and aggregated
//! into [`Error`]. Every error implements `IntoResponse` so handlers can return them with `?`,
//! and anything without a specific mapping becomes a logged 500 via [`InternalServerError`].

pub mod config;
pub mod ingest;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, ingest::IngestError},
};

/// Main error type for the Beacon server application.
///
/// Uses `thiserror`'s `#[from]` so domain and library errors convert with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Field report ingestion aborted before or while committing the report.
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket or filesystem error, typically while binding the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid submissions and unresolvable relations
/// - 404 Not Found - Updating a field report that does not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::IngestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so internal details don't leak to clients.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error").with_code("internal_error")),
        )
            .into_response()
    }
}
