use std::collections::BTreeSet;

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Record whose country, region and district sets are being written.
///
/// Field reports and events share the same location model, each with its own join tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOwner {
    FieldReport(i32),
    Event(i32),
}

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Removes every country, region and district assignment of `owner`.
    pub async fn clear(&self, owner: LocationOwner) -> Result<(), DbErr> {
        match owner {
            LocationOwner::FieldReport(id) => {
                entity::prelude::FieldReportCountry::delete_many()
                    .filter(entity::field_report_country::Column::FieldReportId.eq(id))
                    .exec(self.db)
                    .await?;
                entity::prelude::FieldReportRegion::delete_many()
                    .filter(entity::field_report_region::Column::FieldReportId.eq(id))
                    .exec(self.db)
                    .await?;
                entity::prelude::FieldReportDistrict::delete_many()
                    .filter(entity::field_report_district::Column::FieldReportId.eq(id))
                    .exec(self.db)
                    .await?;
            }
            LocationOwner::Event(id) => {
                entity::prelude::EventCountry::delete_many()
                    .filter(entity::event_country::Column::EventId.eq(id))
                    .exec(self.db)
                    .await?;
                entity::prelude::EventRegion::delete_many()
                    .filter(entity::event_region::Column::EventId.eq(id))
                    .exec(self.db)
                    .await?;
                entity::prelude::EventDistrict::delete_many()
                    .filter(entity::event_district::Column::EventId.eq(id))
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    pub async fn add_countries(
        &self,
        owner: LocationOwner,
        country_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        if country_ids.is_empty() {
            return Ok(());
        }

        match owner {
            LocationOwner::FieldReport(id) => {
                let rows = country_ids.iter().map(|country_id| {
                    entity::field_report_country::ActiveModel {
                        field_report_id: ActiveValue::Set(id),
                        country_id: ActiveValue::Set(*country_id),
                    }
                });

                entity::prelude::FieldReportCountry::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
            LocationOwner::Event(id) => {
                let rows = country_ids
                    .iter()
                    .map(|country_id| entity::event_country::ActiveModel {
                        event_id: ActiveValue::Set(id),
                        country_id: ActiveValue::Set(*country_id),
                    });

                entity::prelude::EventCountry::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    pub async fn add_regions(
        &self,
        owner: LocationOwner,
        region_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        if region_ids.is_empty() {
            return Ok(());
        }

        match owner {
            LocationOwner::FieldReport(id) => {
                let rows = region_ids
                    .iter()
                    .map(|region_id| entity::field_report_region::ActiveModel {
                        field_report_id: ActiveValue::Set(id),
                        region_id: ActiveValue::Set(*region_id),
                    });

                entity::prelude::FieldReportRegion::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
            LocationOwner::Event(id) => {
                let rows = region_ids
                    .iter()
                    .map(|region_id| entity::event_region::ActiveModel {
                        event_id: ActiveValue::Set(id),
                        region_id: ActiveValue::Set(*region_id),
                    });

                entity::prelude::EventRegion::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    pub async fn add_districts(
        &self,
        owner: LocationOwner,
        district_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        if district_ids.is_empty() {
            return Ok(());
        }

        match owner {
            LocationOwner::FieldReport(id) => {
                let rows = district_ids.iter().map(|district_id| {
                    entity::field_report_district::ActiveModel {
                        field_report_id: ActiveValue::Set(id),
                        district_id: ActiveValue::Set(*district_id),
                    }
                });

                entity::prelude::FieldReportDistrict::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
            LocationOwner::Event(id) => {
                let rows = district_ids
                    .iter()
                    .map(|district_id| entity::event_district::ActiveModel {
                        event_id: ActiveValue::Set(id),
                        district_id: ActiveValue::Set(*district_id),
                    });

                entity::prelude::EventDistrict::insert_many(rows)
                    .exec_without_returning(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    pub async fn country_ids(&self, owner: LocationOwner) -> Result<BTreeSet<i32>, DbErr> {
        let ids = match owner {
            LocationOwner::FieldReport(id) => entity::prelude::FieldReportCountry::find()
                .filter(entity::field_report_country::Column::FieldReportId.eq(id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.country_id)
                .collect(),
            LocationOwner::Event(id) => entity::prelude::EventCountry::find()
                .filter(entity::event_country::Column::EventId.eq(id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.country_id)
                .collect(),
        };

        Ok(ids)
    }

    pub async fn region_ids(&self, owner: LocationOwner) -> Result<BTreeSet<i32>, DbErr> {
        let ids = match owner {
            LocationOwner::FieldReport(id) => entity::prelude::FieldReportRegion::find()
                .filter(entity::field_report_region::Column::FieldReportId.eq(id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.region_id)
                .collect(),
            LocationOwner::Event(id) => entity::prelude::EventRegion::find()
                .filter(entity::event_region::Column::EventId.eq(id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.region_id)
                .collect(),
        };

        Ok(ids)
    }

    pub async fn district_ids(&self, owner: LocationOwner) -> Result<BTreeSet<i32>, DbErr> {
        let ids = match owner {
            LocationOwner::FieldReport(id) => entity::prelude::FieldReportDistrict::find()
                .filter(entity::field_report_district::Column::FieldReportId.eq(id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.district_id)
                .collect(),
            LocationOwner::Event(id) => entity::prelude::EventDistrict::find()
                .filter(entity::event_district::Column::EventId.eq(id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.district_id)
                .collect(),
        };

        Ok(ids)
    }
}
