use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Convert the test state into any type that can be constructed from a database connection.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Create-table statements for every table the ingestion pipeline touches, parents first.
pub fn ingest_table_statements() -> Vec<(String, TableCreateStatement)> {
    use entity::prelude::*;
    use sea_orm::Schema;

    fn stmt<E: sea_orm::EntityTrait>(schema: &Schema, entity: E) -> (String, TableCreateStatement) {
        (
            entity.table_name().to_string(),
            schema.create_table_from_entity(entity),
        )
    }

    let schema = Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        stmt(&schema, Region),
        stmt(&schema, Country),
        stmt(&schema, District),
        stmt(&schema, DisasterType),
        stmt(&schema, BeaconUser),
        stmt(&schema, Event),
        stmt(&schema, EventCountry),
        stmt(&schema, EventRegion),
        stmt(&schema, EventDistrict),
        stmt(&schema, FieldReport),
        stmt(&schema, FieldReportCountry),
        stmt(&schema, FieldReportRegion),
        stmt(&schema, FieldReportDistrict),
        stmt(&schema, Action),
        stmt(&schema, ActionsTaken),
        stmt(&schema, ActionsTakenAction),
        stmt(&schema, FieldReportContact),
        stmt(&schema, SourceType),
        stmt(&schema, Source),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_ingest_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let stmts = $crate::setup::ingest_table_statements()
                .into_iter()
                .map(|(_, stmt)| stmt)
                .collect();
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
