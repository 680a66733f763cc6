use crate::server::{model::ingest::LocationSets, service::ingest::location::LocationExpander};

use super::*;

/// Expect supplied regions to be kept alongside the regions implied by countries
#[tokio::test]
async fn adds_supplied_and_derived_regions() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let (africa, kenya) = test
        .geo()
        .insert_country_in_new_region("Kenya", "Africa")
        .await?;
    let europe = test.geo().insert_region("Europe").await?;
    let district = test.geo().insert_district("Nairobi", kenya.id).await?;

    let payload = payload::with(
        payload::minimal(user.id, dtype.id),
        json!({
            "countries": [kenya.id],
            "regions": [europe.id, africa.id],
            "districts": [district.id],
        }),
    );
    let outcome = IngestService::new(&test.state.db)
        .create(decode(payload))
        .await
        .unwrap();

    assert!(outcome.secondary_errors.is_empty());
    assert_eq!(
        report_regions(&test, outcome.id).await?,
        BTreeSet::from([africa.id, europe.id])
    );
    let districts = LocationRepository::new(&test.state.db)
        .district_ids(LocationOwner::FieldReport(outcome.id))
        .await?;
    assert_eq!(districts, BTreeSet::from([district.id]));

    Ok(())
}

/// Expect countries without a parent region to add no region
#[tokio::test]
async fn skips_countries_without_region() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;
    let country = test.geo().insert_country("Antarctica", None).await?;

    let payload = payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "countries": [country.id] }),
    );
    let outcome = IngestService::new(&test.state.db)
        .create(decode(payload))
        .await
        .unwrap();

    assert_eq!(report_countries(&test, outcome.id).await?, BTreeSet::from([country.id]));
    assert!(report_regions(&test, outcome.id).await?.is_empty());

    Ok(())
}

/// Expect a location failure to be attributed to the report and not abort the ingestion
#[tokio::test]
async fn reports_unknown_country() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (user, dtype) = test.reference().insert_submitter().await?;

    let payload = payload::with(
        payload::minimal(user.id, dtype.id),
        json!({ "countries": [404] }),
    );
    let outcome = IngestService::new(&test.state.db)
        .create(decode(payload))
        .await
        .unwrap();

    let steps: Vec<SecondaryStep> = outcome
        .secondary_errors
        .iter()
        .map(|err| err.step)
        .collect();
    assert_eq!(
        steps,
        vec![SecondaryStep::Locations, SecondaryStep::EventLocations]
    );
    assert!(stored_report(&test, outcome.id).await?.event_id.is_some());

    Ok(())
}

/// Expect an update with no location sets to clear every assignment
#[tokio::test]
async fn clears_locations_on_update() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let report = {
        let (user, dtype) = test.reference().insert_submitter().await?;
        crate::server::data::field_report::FieldReportRepository::new(&test.state.db)
            .create(crate::server::model::ingest::ReportFields {
                summary: Some("Flood X".to_string()),
                user_id: Some(user.id),
                dtype_id: Some(dtype.id),
                ..Default::default()
            })
            .await?
    };
    let (_, country) = test
        .geo()
        .insert_country_in_new_region("Kenya", "Africa")
        .await?;

    let expander = LocationExpander::new(&test.state.db);
    let owner = LocationOwner::FieldReport(report.id);
    let locations = LocationSets {
        countries: Some(BTreeSet::from([country.id])),
        ..Default::default()
    };
    expander.apply(report.id, owner, &locations, false).await.unwrap();
    assert_eq!(report_regions(&test, report.id).await?.len(), 1);

    expander
        .apply(report.id, owner, &LocationSets::default(), true)
        .await
        .unwrap();

    assert!(report_countries(&test, report.id).await?.is_empty());
    assert!(report_regions(&test, report.id).await?.is_empty());

    Ok(())
}
