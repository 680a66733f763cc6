//! Server application core modules.
//!
//! HTTP routing, configuration, persistence and the field report ingestion pipeline of the
//! Beacon service.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
