use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, field_report::FieldReportRepository, location::LocationOwner},
    error::ingest::{RelationWriteError, SecondaryStep},
    model::{
        db::{EventModel, FieldReportModel},
        ingest::LocationSets,
    },
    service::ingest::location::LocationExpander,
};

/// Synthesizes a parent event for a report stored without one.
pub struct AutoEventLinker<'a> {
    db: &'a DatabaseConnection,
}

/// Result of linking; the event is kept even when later steps failed.
#[derive(Debug, Default)]
pub struct LinkOutcome {
    pub event: Option<EventModel>,
    pub errors: Vec<RelationWriteError>,
}

impl<'a> AutoEventLinker<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event named after the report, points the report at it and copies the
    /// report's locations onto it.
    ///
    /// The event inherits the report's disaster type and start date and is flagged as
    /// auto-generated.
    pub async fn link(&self, report: &FieldReportModel, locations: &LocationSets) -> LinkOutcome {
        let mut outcome = LinkOutcome::default();

        let event = match EventRepository::new(self.db)
            .create_auto_generated(report.summary.clone(), report.dtype_id, report.start_date)
            .await
        {
            Ok(event) => event,
            Err(err) => {
                outcome.errors.push(RelationWriteError::new(
                    SecondaryStep::EventLink,
                    report.id,
                    err,
                ));
                return outcome;
            }
        };

        if let Err(err) = FieldReportRepository::new(self.db)
            .set_event(report.id, event.id)
            .await
        {
            outcome.errors.push(RelationWriteError::new(
                SecondaryStep::EventLink,
                report.id,
                err,
            ));
        }

        if let Err(err) = LocationExpander::new(self.db)
            .apply(report.id, LocationOwner::Event(event.id), locations, false)
            .await
        {
            outcome.errors.push(err);
        }

        tracing::debug!(
            report_id = report.id,
            event_id = event.id,
            "Linked field report to auto-generated event"
        );

        outcome.event = Some(event);
        outcome
    }
}
