//! Database model type aliases.
//!
//! Short names for the SeaORM models the ingestion pipeline reads and writes, so signatures
//! don't need to spell out the `entity` crate paths.

/// A submitted field report with its scalar figures and request statuses.
pub type FieldReportModel = entity::field_report::Model;

/// A disaster or operation grouping one or more field reports.
pub type EventModel = entity::event::Model;

pub type UserModel = entity::beacon_user::Model;

pub type DisasterTypeModel = entity::disaster_type::Model;

pub type CountryModel = entity::country::Model;

/// A response action taken, linked to entries of the action catalog.
pub type ActionsTakenModel = entity::actions_taken::Model;

pub type ContactModel = entity::field_report_contact::Model;

pub type SourceModel = entity::source::Model;

/// Entry of the free-text source classification catalog.
pub type SourceTypeModel = entity::source_type::Model;
