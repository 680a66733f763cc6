use super::*;

/// Expect every request status to default to No when none are submitted
#[tokio::test]
async fn defaults_request_statuses() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;

    let report = insert_report(&mut test).await?;

    assert_eq!(report.summary, "Flood X");
    assert_eq!(report.visibility, Visibility::Membership);
    assert_eq!(report.dref, RequestChoice::No);
    assert_eq!(report.eru_water_sanitation_20, RequestChoice::No);
    assert_eq!(report.event_id, None);
    assert_eq!(report.epi_figures_source, None);

    Ok(())
}

/// Expect submitted statuses and figures to be stored
#[tokio::test]
async fn stores_submitted_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let fields = ReportFields {
        summary: Some("Cyclone".to_string()),
        user_id: Some(user.id),
        dtype_id: Some(dtype.id),
        visibility: Visibility::Public,
        epi_figures_source: Some(EpiSource::Who),
        requests: vec![
            (RequestField::Dref, RequestChoice::Requested),
            (RequestField::EruRelief, RequestChoice::Complete),
        ],
        figures: ImpactFigures {
            num_dead: Some(4),
            dref_amount: Some(25000),
            ..Default::default()
        },
        ..Default::default()
    };

    let repo = FieldReportRepository::new(&test.state.db);
    let report = repo.create(fields).await?;

    assert_eq!(report.visibility, Visibility::Public);
    assert_eq!(report.epi_figures_source, Some(EpiSource::Who));
    assert_eq!(report.dref, RequestChoice::Requested);
    assert_eq!(report.eru_relief, RequestChoice::Complete);
    assert_eq!(report.appeal, RequestChoice::No);
    assert_eq!(report.num_dead, Some(4));
    assert_eq!(report.num_injured, None);
    assert_eq!(report.dref_amount, Some(25000));

    Ok(())
}

/// Expect Error when the submitting user does not exist
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (_, dtype) = test.reference().insert_submitter().await?;

    let fields = ReportFields {
        summary: Some("Flood X".to_string()),
        user_id: Some(999),
        dtype_id: Some(dtype.id),
        ..Default::default()
    };

    let result = FieldReportRepository::new(&test.state.db).create(fields).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = FieldReportRepository::new(&test.state.db)
        .create(ReportFields::default())
        .await;

    assert!(result.is_err());

    Ok(())
}
