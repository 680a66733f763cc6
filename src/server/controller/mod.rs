//! HTTP controller endpoints for the Beacon web API.
//!
//! Controllers decode requests, hand them to the ingestion service and map the outcome onto
//! HTTP responses. Endpoints are documented for OpenAPI through utoipa.

pub mod field_report;
