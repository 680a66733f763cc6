use super::*;

/// Expect only submitted fields to change on update
#[tokio::test]
async fn leaves_absent_fields_unchanged() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;
    let repo = FieldReportRepository::new(&test.state.db);

    let report = repo
        .update(
            report,
            ReportFields {
                description: Some("Rivers rising".to_string()),
                requests: vec![(RequestField::Appeal, RequestChoice::Planned)],
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(report.summary, "Flood X");
    assert_eq!(report.description.as_deref(), Some("Rivers rising"));
    assert_eq!(report.appeal, RequestChoice::Planned);
    assert_eq!(report.dref, RequestChoice::No);

    Ok(())
}

/// Expect visibility and epidemiological source to be rewritten on every update
#[tokio::test]
async fn always_rewrites_visibility_and_epi_source() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;
    let repo = FieldReportRepository::new(&test.state.db);

    let report = repo
        .update(
            report,
            ReportFields {
                visibility: Visibility::Internal,
                epi_figures_source: Some(EpiSource::Other),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(report.visibility, Visibility::Internal);

    let report = repo.update(report, ReportFields::default()).await?;

    assert_eq!(report.visibility, Visibility::Membership);
    assert_eq!(report.epi_figures_source, None);

    Ok(())
}
