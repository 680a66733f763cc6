//! Declarative test builder.
//!
//! `TestBuilder` collects the tables a test needs and creates them during `build()`.
//! Leaving a table out is how tests make the storage layer reject writes to it.

use std::collections::HashSet;

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::ingest_table_statements, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_ingest_tables: bool,
    tables: Vec<TableCreateStatement>,
    excluded: HashSet<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            include_ingest_tables: false,
            tables: Vec::new(),
            excluded: HashSet::new(),
        }
    }

    /// Add every table used by field report ingestion.
    pub fn with_ingest_tables(mut self) -> Self {
        self.include_ingest_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beacon_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), beacon_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Region)
    ///     .with_table(Country)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Skip creating the table for `entity`, so any write to it fails.
    pub fn without_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.excluded.insert(entity.table_name().to_string());
        self
    }

    /// Create all configured tables on a fresh in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();

        if self.include_ingest_tables {
            all_tables.extend(
                ingest_table_statements()
                    .into_iter()
                    .filter(|(name, _)| !self.excluded.contains(name))
                    .map(|(_, stmt)| stmt),
            );
        }

        all_tables.extend(self.tables);

        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}
