//! Request and response shapes shared by the HTTP layer and the ingestion services.

pub mod api;
pub mod field_report;
