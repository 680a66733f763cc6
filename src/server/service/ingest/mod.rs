//! Field report ingestion pipeline.
//!
//! A submission moves through a fixed sequence of stages:
//!
//! `Normalizing -> Resolving -> Partitioning -> CommitPrimary -> ExpandLocations ->
//! MaterializeMeta -> (LinkEvent) -> Done`
//!
//! Only `Resolving` and `CommitPrimary` can abort, and nothing has been written when they do.
//! Once the report row is committed it stays committed: locations, nested records and the
//! auto-generated event are each written in their own failure boundary, and their failures
//! are collected into [`IngestOutcome::secondary_errors`] and logged instead of failing the
//! request.

pub mod event_link;
pub mod location;
pub mod meta;
pub mod normalize;
pub mod partition;
pub mod resolve;

#[cfg(test)]
mod tests;

use std::fmt;

use sea_orm::DatabaseConnection;

use crate::{
    model::field_report::FieldReportPayload,
    server::{
        data::{field_report::FieldReportRepository, location::LocationOwner},
        error::ingest::{IngestError, RelationWriteError},
        service::ingest::{
            event_link::AutoEventLinker,
            location::LocationExpander,
            meta::MetaMaterializer,
            normalize::ChoiceNormalizer,
            partition::{partition, Partitioned},
            resolve::{validate_scalars, RelationResolver},
        },
    },
};

/// Maximum number of characters of a secondary error message written to the log.
pub const SECONDARY_ERROR_LOG_LIMIT: usize = 200;

/// Stage of the ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStage {
    Normalizing,
    Resolving,
    Partitioning,
    CommitPrimary,
    ExpandLocations,
    MaterializeMeta,
    LinkEvent,
    Done,
}

impl fmt::Display for IngestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Normalizing => "normalizing",
            Self::Resolving => "resolving",
            Self::Partitioning => "partitioning",
            Self::CommitPrimary => "committing report",
            Self::ExpandLocations => "expanding locations",
            Self::MaterializeMeta => "materializing meta",
            Self::LinkEvent => "linking event",
            Self::Done => "done",
        };

        f.write_str(stage)
    }
}

/// Result of a successful ingestion.
///
/// The report is committed even when `secondary_errors` is non-empty.
#[derive(Debug)]
pub struct IngestOutcome {
    pub id: i32,
    pub secondary_errors: Vec<RelationWriteError>,
}

/// Service sequencing the ingestion stages for field report creates and updates.
pub struct IngestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngestService<'a> {
    /// Creates a new instance of IngestService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ingests a new field report.
    ///
    /// # Returns
    /// - `Ok(IngestOutcome)` - The report was stored; secondary failures are listed in the outcome
    /// - `Err(IngestError::Validation)` - The summary is missing or blank
    /// - `Err(IngestError::MissingRequiredRelation)` - `user` or `dtype` is absent or null
    /// - `Err(IngestError::RelationNotFound)` - A referenced record does not exist
    /// - `Err(IngestError::PrimaryWrite)` - The report row could not be inserted
    pub async fn create(&self, payload: FieldReportPayload) -> Result<IngestOutcome, IngestError> {
        self.ingest(None, payload).await
    }

    /// Ingests an update to an existing field report.
    ///
    /// `user` and `dtype` are required as on create. Other scalars absent from the submission
    /// keep their stored values, while locations, actions taken, contacts and sources are
    /// replaced by what was submitted.
    ///
    /// # Returns
    /// Same as [`Self::create`], plus `Err(IngestError::ReportNotFound)` for an unknown `report_id`.
    pub async fn update(
        &self,
        report_id: i32,
        payload: FieldReportPayload,
    ) -> Result<IngestOutcome, IngestError> {
        self.ingest(Some(report_id), payload).await
    }

    async fn ingest(
        &self,
        report_id: Option<i32>,
        payload: FieldReportPayload,
    ) -> Result<IngestOutcome, IngestError> {
        let is_update = report_id.is_some();
        let report_repo = FieldReportRepository::new(self.db);

        tracing::debug!(stage = %IngestStage::Normalizing, is_update, "Ingesting field report");
        let choices = ChoiceNormalizer::normalize(&payload);

        tracing::debug!(stage = %IngestStage::Resolving, "Entering stage");
        let existing = match report_id {
            Some(id) => Some(
                report_repo
                    .get_by_id(id)
                    .await
                    .map_err(|source| IngestError::Storage {
                        stage: IngestStage::Resolving,
                        source,
                    })?
                    .ok_or(IngestError::ReportNotFound(id))?,
            ),
            None => None,
        };
        validate_scalars(&payload, is_update)?;
        let relations = RelationResolver::new(self.db).resolve(&payload).await?;

        tracing::debug!(stage = %IngestStage::Partitioning, "Entering stage");
        let Partitioned {
            fields,
            locations,
            meta,
        } = partition(payload, choices, &relations);

        tracing::debug!(stage = %IngestStage::CommitPrimary, "Entering stage");
        let report = match existing {
            Some(existing) => report_repo.update(existing, fields).await,
            None => report_repo.create(fields).await,
        }
        .map_err(IngestError::PrimaryWrite)?;

        let mut secondary_errors = Vec::new();

        tracing::debug!(
            stage = %IngestStage::ExpandLocations,
            report_id = report.id,
            "Entering stage"
        );
        if let Err(err) = LocationExpander::new(self.db)
            .apply(
                report.id,
                LocationOwner::FieldReport(report.id),
                &locations,
                is_update,
            )
            .await
        {
            secondary_errors.push(err);
        }

        tracing::debug!(
            stage = %IngestStage::MaterializeMeta,
            report_id = report.id,
            "Entering stage"
        );
        secondary_errors.extend(
            MetaMaterializer::new(self.db)
                .apply(report.id, meta, is_update)
                .await,
        );

        if report.event_id.is_none() {
            tracing::debug!(
                stage = %IngestStage::LinkEvent,
                report_id = report.id,
                "Entering stage"
            );
            let outcome = AutoEventLinker::new(self.db).link(&report, &locations).await;
            secondary_errors.extend(outcome.errors);
        }

        tracing::debug!(
            stage = %IngestStage::Done,
            report_id = report.id,
            "Entering stage"
        );
        log_secondary_errors(report.id, &secondary_errors);

        Ok(IngestOutcome {
            id: report.id,
            secondary_errors,
        })
    }
}

fn log_secondary_errors(report_id: i32, errors: &[RelationWriteError]) {
    if errors.is_empty() {
        return;
    }

    tracing::error!(
        report_id,
        "{} secondary write(s) failed while ingesting field report",
        errors.len()
    );

    for err in errors {
        tracing::error!(
            report_id,
            step = %err.step,
            "{}",
            truncate(&err.to_string(), SECONDARY_ERROR_LOG_LIMIT)
        );
    }
}

/// Cuts `message` down to at most `max_chars` characters.
fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
