//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table (or one family of join tables) each and are
//! generic over [`sea_orm::ConnectionTrait`], so callers can pass either a connection or a
//! transaction.

pub mod actions_taken;
pub mod contact;
pub mod disaster_type;
pub mod event;
pub mod field_report;
pub mod geo;
pub mod location;
pub mod source;
pub mod source_type;
pub mod user;

#[cfg(test)]
mod tests;
