use super::*;

use crate::server::data::source_type::SourceTypeRepository;

/// Expect a new source type to be created on first use
#[tokio::test]
async fn creates_missing_source_type() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::SourceType)?;

    let source_type = SourceTypeRepository::new(&test.state.db)
        .get_or_create("Government")
        .await?;

    assert_eq!(source_type.name, "Government");

    Ok(())
}

/// Expect the existing source type to be returned rather than a duplicate created
#[tokio::test]
async fn returns_existing_source_type() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::SourceType)?;
    let existing = test.reference().insert_source_type("Government").await?;

    let repo = SourceTypeRepository::new(&test.state.db);
    let first = repo.get_or_create("Government").await?;
    let second = repo.get_or_create("Government").await?;

    assert_eq!(first.id, existing.id);
    assert_eq!(second.id, existing.id);
    let count = entity::prelude::SourceType::find().all(&test.state.db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Expect names to match case-sensitively
#[tokio::test]
async fn matches_name_case_sensitively() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::SourceType)?;
    let existing = test.reference().insert_source_type("Government").await?;

    let created = SourceTypeRepository::new(&test.state.db)
        .get_or_create("government")
        .await?;

    assert_ne!(created.id, existing.id);
    assert_eq!(created.name, "government");

    Ok(())
}
