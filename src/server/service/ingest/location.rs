use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        geo::GeoRepository,
        location::{LocationOwner, LocationRepository},
    },
    error::ingest::{RelationWriteError, SecondaryStep},
    model::ingest::LocationSets,
};

/// Writes location sets onto a report or event, adding the regions its countries imply.
pub struct LocationExpander<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationExpander<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies `locations` to `target`.
    ///
    /// On update every existing assignment is cleared first, so the stored sets end up equal
    /// to the submitted ones. Afterwards the region set holds the parent region of every
    /// assigned country plus any regions supplied directly.
    ///
    /// # Arguments
    /// - `report_id` - Field report being ingested, used to attribute failures
    /// - `target` - Record receiving the locations, the report itself or its event
    /// - `locations` - Partitioned location sets of the submission
    /// - `is_update` - Whether existing assignments must be replaced
    pub async fn apply(
        &self,
        report_id: i32,
        target: LocationOwner,
        locations: &LocationSets,
        is_update: bool,
    ) -> Result<(), RelationWriteError> {
        let step = match target {
            LocationOwner::FieldReport(_) => SecondaryStep::Locations,
            LocationOwner::Event(_) => SecondaryStep::EventLocations,
        };

        self.expand(target, locations, is_update)
            .await
            .map_err(|err| RelationWriteError::new(step, report_id, err))
    }

    async fn expand(
        &self,
        target: LocationOwner,
        locations: &LocationSets,
        is_update: bool,
    ) -> Result<(), DbErr> {
        let location_repo = LocationRepository::new(self.db);

        if is_update {
            location_repo.clear(target).await?;
        }

        if let Some(districts) = &locations.districts {
            location_repo.add_districts(target, districts).await?;
        }

        let mut regions = match &locations.countries {
            Some(countries) => {
                location_repo.add_countries(target, countries).await?;

                GeoRepository::new(self.db)
                    .region_ids_for_countries(countries)
                    .await?
            }
            None => Default::default(),
        };

        if let Some(supplied) = &locations.regions {
            regions.extend(supplied.iter().copied());
        }

        location_repo.add_regions(target, &regions).await?;

        tracing::debug!(
            owner = ?target,
            regions = regions.len(),
            "Applied location sets"
        );

        Ok(())
    }
}
