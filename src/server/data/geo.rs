use std::collections::BTreeSet;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct GeoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GeoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the distinct parent regions of the given countries.
    ///
    /// Countries without a region, and ids that match no country, contribute nothing.
    pub async fn region_ids_for_countries(
        &self,
        country_ids: &BTreeSet<i32>,
    ) -> Result<BTreeSet<i32>, DbErr> {
        if country_ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let countries = entity::prelude::Country::find()
            .filter(entity::country::Column::Id.is_in(country_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(countries
            .into_iter()
            .filter_map(|country| country.region_id)
            .collect())
    }
}
