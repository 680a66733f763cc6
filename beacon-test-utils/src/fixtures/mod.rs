//! Test fixture modules for database records and request payloads.
//!
//! - `geo` - Regions, countries and districts
//! - `reference` - Users, disaster types, action catalog entries and events
//! - `payload` - JSON field report submissions

pub mod geo;
pub mod payload;
pub mod reference;
