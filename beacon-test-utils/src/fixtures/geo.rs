use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CountryModel, DistrictModel, RegionModel},
    TestSetup,
};

impl TestSetup {
    pub fn geo<'a>(&'a mut self) -> GeoFixtures<'a> {
        GeoFixtures { setup: self }
    }
}

pub struct GeoFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> GeoFixtures<'a> {
    pub async fn insert_region(&self, name: &str) -> Result<RegionModel, TestError> {
        Ok(
            entity::prelude::Region::insert(entity::region::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a country, optionally placed within a region.
    pub async fn insert_country(
        &self,
        name: &str,
        region_id: Option<i32>,
    ) -> Result<CountryModel, TestError> {
        Ok(
            entity::prelude::Country::insert(entity::country::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                iso: ActiveValue::Set(None),
                region_id: ActiveValue::Set(region_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_district(
        &self,
        name: &str,
        country_id: i32,
    ) -> Result<DistrictModel, TestError> {
        Ok(
            entity::prelude::District::insert(entity::district::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                country_id: ActiveValue::Set(country_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a region along with one country inside it.
    pub async fn insert_country_in_new_region(
        &self,
        country_name: &str,
        region_name: &str,
    ) -> Result<(RegionModel, CountryModel), TestError> {
        let region = self.insert_region(region_name).await?;
        let country = self.insert_country(country_name, Some(region.id)).await?;

        Ok((region, country))
    }
}
