use std::fmt;

use sea_orm::DatabaseConnection;

use crate::{
    model::field_report::{FieldReportPayload, LooseId},
    server::{
        data::{
            disaster_type::DisasterTypeRepository, event::EventRepository, user::UserRepository,
        },
        error::ingest::IngestError,
        model::db::{DisasterTypeModel, EventModel, UserModel},
        service::ingest::IngestStage,
    },
};

/// Identifier-valued fields of a submission that reference another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationField {
    User,
    DisasterType,
    Event,
}

impl RelationField {
    /// Payload key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::DisasterType => "dtype",
            Self::Event => "event",
        }
    }

    pub fn entity_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::DisasterType => "disaster type",
            Self::Event => "event",
        }
    }

    /// Whether every submission must reference this record.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Event)
    }
}

impl fmt::Display for RelationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Records referenced by a submission; `None` when the field was absent or null.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRelations {
    pub user: Option<UserModel>,
    pub dtype: Option<DisasterTypeModel>,
    pub event: Option<EventModel>,
}

pub struct RelationResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up every relation referenced by the submission.
    ///
    /// `user` and `dtype` must be supplied on create and update alike; `event` is optional.
    ///
    /// # Returns
    /// - `Ok(ResolvedRelations)` - Every supplied id matched a record
    /// - `Err(IngestError::MissingRequiredRelation)` - A required field is absent or null
    /// - `Err(IngestError::RelationNotFound)` - A supplied id matches no record
    /// - `Err(IngestError::Storage)` - A lookup query failed
    pub async fn resolve(
        &self,
        payload: &FieldReportPayload,
    ) -> Result<ResolvedRelations, IngestError> {
        let user_id = Self::require(RelationField::User, payload.user)?;
        let dtype_id = Self::require(RelationField::DisasterType, payload.dtype)?;
        let event_id = Self::require(RelationField::Event, payload.event)?;

        let user = match user_id {
            Some(id) => Some(
                UserRepository::new(self.db)
                    .get_by_id(id)
                    .await
                    .map_err(storage_error)?
                    .ok_or(not_found(RelationField::User, id))?,
            ),
            None => None,
        };

        let dtype = match dtype_id {
            Some(id) => Some(
                DisasterTypeRepository::new(self.db)
                    .get_by_id(id)
                    .await
                    .map_err(storage_error)?
                    .ok_or(not_found(RelationField::DisasterType, id))?,
            ),
            None => None,
        };

        let event = match event_id {
            Some(id) => Some(
                EventRepository::new(self.db)
                    .get_by_id(id)
                    .await
                    .map_err(storage_error)?
                    .ok_or(not_found(RelationField::Event, id))?,
            ),
            None => None,
        };

        Ok(ResolvedRelations { user, dtype, event })
    }

    fn require(field: RelationField, id: Option<LooseId>) -> Result<Option<i32>, IngestError> {
        match id {
            Some(LooseId(id)) => Ok(Some(id)),
            None if field.is_required() => Err(IngestError::MissingRequiredRelation(field)),
            None => Ok(None),
        }
    }
}

/// Checks the scalar fields a report cannot be stored without.
///
/// The summary is required on create and may not be blanked by an update.
pub fn validate_scalars(payload: &FieldReportPayload, is_update: bool) -> Result<(), IngestError> {
    match payload.summary.as_deref().map(str::trim) {
        Some("") => Err(IngestError::validation("summary", "Summary may not be blank")),
        None if !is_update => Err(IngestError::validation("summary", "Summary is required")),
        _ => Ok(()),
    }
}

fn not_found(field: RelationField, id: i32) -> IngestError {
    IngestError::RelationNotFound { field, id }
}

fn storage_error(source: sea_orm::DbErr) -> IngestError {
    IngestError::Storage {
        stage: IngestStage::Resolving,
        source,
    }
}
