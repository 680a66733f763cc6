//! Shared constants for test database setup.

/// Connection string for the per-test in-memory SQLite database.
///
/// SeaORM limits `:memory:` pools to a single connection, so every query in a test
/// sees the same database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Username given to users created by the reference fixtures.
pub static TEST_USERNAME: &str = "field-officer";
