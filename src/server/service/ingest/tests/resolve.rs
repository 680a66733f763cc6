use crate::server::service::ingest::resolve::{validate_scalars, RelationResolver};

use super::*;

/// Expect every supplied relation to be resolved to its record
#[tokio::test]
async fn resolves_supplied_relations() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let event = test.reference().insert_event("Monsoon", dtype.id).await?;

    let payload = decode(payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "event": event.id }),
    ));
    let relations = RelationResolver::new(&test.state.db)
        .resolve(&payload)
        .await
        .unwrap();

    assert_eq!(relations.user.map(|user| user.id), Some(user.id));
    assert_eq!(relations.dtype.map(|dtype| dtype.id), Some(dtype.id));
    assert_eq!(relations.event.map(|event| event.id), Some(event.id));

    Ok(())
}

/// Expect a null event to be left unresolved
#[tokio::test]
async fn allows_null_event() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let payload = decode(payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "event": null }),
    ));
    let relations = RelationResolver::new(&test.state.db)
        .resolve(&payload)
        .await
        .unwrap();

    assert!(relations.event.is_none());

    Ok(())
}

/// Expect Error when a supplied event does not exist
#[tokio::test]
async fn fails_for_unknown_event() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let payload = decode(payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "event": 77 }),
    ));
    let result = RelationResolver::new(&test.state.db)
        .resolve(&payload)
        .await;

    assert!(matches!(
        result,
        Err(IngestError::RelationNotFound {
            field: RelationField::Event,
            id: 77
        })
    ));

    Ok(())
}

/// Expect Error when a required relation is absent or null
#[tokio::test]
async fn fails_for_missing_required_relation() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let resolver = RelationResolver::new(&test.state.db);

    assert!(matches!(
        resolver.resolve(&decode(json!({}))).await,
        Err(IngestError::MissingRequiredRelation(RelationField::User))
    ));
    assert!(matches!(
        resolver
            .resolve(&decode(json!({ "user": user.id, "dtype": null })))
            .await,
        Err(IngestError::MissingRequiredRelation(RelationField::DisasterType))
    ));
    assert!(resolver
        .resolve(&decode(json!({ "user": user.id, "dtype": dtype.id })))
        .await
        .is_ok());

    Ok(())
}

/// Expect Error when lookups fail because tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = RelationResolver::new(&test.state.db)
        .resolve(&decode(payload::minimal(1, 1)))
        .await;

    assert!(matches!(
        result,
        Err(IngestError::Storage {
            stage: IngestStage::Resolving,
            ..
        })
    ));

    Ok(())
}

/// Expect summary to be required on create and never blank
#[test]
fn validates_summary() {
    assert!(validate_scalars(&decode(json!({ "summary": "Flood X" })), false).is_ok());
    assert!(validate_scalars(&decode(json!({})), false).is_err());
    assert!(validate_scalars(&decode(json!({})), true).is_ok());
    assert!(validate_scalars(&decode(json!({ "summary": "" })), true).is_err());
}
