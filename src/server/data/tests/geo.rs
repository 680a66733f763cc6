use std::collections::BTreeSet;

use super::*;

use crate::server::data::geo::GeoRepository;

/// Expect the distinct parent regions of the countries, skipping countries without one
#[tokio::test]
async fn finds_parent_regions() -> Result<(), TestError> {
    let mut test = test_setup_with_ingest_tables!()?;
    let (africa, kenya) = test
        .geo()
        .insert_country_in_new_region("Kenya", "Africa")
        .await?;
    let uganda = test.geo().insert_country("Uganda", Some(africa.id)).await?;
    let stateless = test.geo().insert_country("Antarctica", None).await?;

    let regions = GeoRepository::new(&test.state.db)
        .region_ids_for_countries(&BTreeSet::from([kenya.id, uganda.id, stateless.id, 404]))
        .await?;

    assert_eq!(regions, BTreeSet::from([africa.id]));

    Ok(())
}

/// Expect no query and an empty result for an empty country set
#[tokio::test]
async fn empty_countries_give_no_regions() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let regions = GeoRepository::new(&test.state.db)
        .region_ids_for_countries(&BTreeSet::new())
        .await?;

    assert!(regions.is_empty());

    Ok(())
}
