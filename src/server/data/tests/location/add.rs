use super::*;

/// Expect countries, regions and districts to be stored for a field report
#[tokio::test]
async fn adds_report_locations() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;
    let (region, country) = test
        .geo()
        .insert_country_in_new_region("Kenya", "Africa")
        .await?;
    let district = test.geo().insert_district("Nairobi", country.id).await?;

    let owner = LocationOwner::FieldReport(report.id);
    let repo = LocationRepository::new(&test.state.db);
    repo.add_countries(owner, &BTreeSet::from([country.id]))
        .await?;
    repo.add_regions(owner, &BTreeSet::from([region.id])).await?;
    repo.add_districts(owner, &BTreeSet::from([district.id]))
        .await?;

    assert_eq!(repo.country_ids(owner).await?, BTreeSet::from([country.id]));
    assert_eq!(repo.region_ids(owner).await?, BTreeSet::from([region.id]));
    assert_eq!(
        repo.district_ids(owner).await?,
        BTreeSet::from([district.id])
    );

    Ok(())
}

/// Expect event locations to be kept apart from report locations
#[tokio::test]
async fn adds_event_locations() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;
    let event = test
        .reference()
        .insert_event("Flood X", report.dtype_id)
        .await?;
    let country = test.geo().insert_country("Chad", None).await?;

    let repo = LocationRepository::new(&test.state.db);
    repo.add_countries(LocationOwner::Event(event.id), &BTreeSet::from([country.id]))
        .await?;

    assert_eq!(
        repo.country_ids(LocationOwner::Event(event.id)).await?,
        BTreeSet::from([country.id])
    );
    assert!(repo
        .country_ids(LocationOwner::FieldReport(report.id))
        .await?
        .is_empty());

    Ok(())
}

/// Expect Error when a country does not exist
#[tokio::test]
async fn fails_for_unknown_country() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;

    let result = LocationRepository::new(&test.state.db)
        .add_countries(LocationOwner::FieldReport(report.id), &BTreeSet::from([404]))
        .await;

    assert!(result.is_err());

    Ok(())
}
