use super::*;

/// Expect the report to point at the event after linking
#[tokio::test]
async fn links_report_to_event() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;
    let event = test
        .reference()
        .insert_event("Flood X", report.dtype_id)
        .await?;

    let repo = FieldReportRepository::new(&test.state.db);
    repo.set_event(report.id, event.id).await?;

    let stored = repo.get_by_id(report.id).await?.unwrap();
    assert_eq!(stored.event_id, Some(event.id));
    assert_eq!(stored.summary, report.summary);

    Ok(())
}

/// Expect Error when the report does not exist
#[tokio::test]
async fn fails_for_unknown_report() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (_, dtype) = test.reference().insert_submitter().await?;
    let event = test.reference().insert_event("Flood X", dtype.id).await?;

    let result = FieldReportRepository::new(&test.state.db)
        .set_event(42, event.id)
        .await;

    assert!(matches!(result, Err(sea_orm::DbErr::RecordNotFound(_))));

    Ok(())
}
