use super::*;

/// Expect every location of the owner to be removed and other owners to be untouched
#[tokio::test]
async fn clears_only_owner_locations() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = insert_report(&mut test).await?;
    let event = test
        .reference()
        .insert_event("Flood X", report.dtype_id)
        .await?;
    let (region, country) = test
        .geo()
        .insert_country_in_new_region("Kenya", "Africa")
        .await?;

    let report_owner = LocationOwner::FieldReport(report.id);
    let event_owner = LocationOwner::Event(event.id);
    let repo = LocationRepository::new(&test.state.db);
    for owner in [report_owner, event_owner] {
        repo.add_countries(owner, &BTreeSet::from([country.id]))
            .await?;
        repo.add_regions(owner, &BTreeSet::from([region.id])).await?;
    }

    repo.clear(report_owner).await?;

    assert!(repo.country_ids(report_owner).await?.is_empty());
    assert!(repo.region_ids(report_owner).await?.is_empty());
    assert_eq!(
        repo.country_ids(event_owner).await?,
        BTreeSet::from([country.id])
    );

    Ok(())
}
