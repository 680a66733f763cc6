//! Server application models and type definitions.
//!
//! Application state shared with HTTP handlers, database model aliases, and the intermediate
//! structures the ingestion pipeline passes between its stages.

pub mod app;
pub mod db;
pub mod ingest;
