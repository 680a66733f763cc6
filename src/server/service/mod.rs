//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories into multi-step operations. The only service is field
//! report ingestion, which turns a submission into a stored report with its locations,
//! nested records and parent event.

pub mod ingest;
