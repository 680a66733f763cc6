use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::SourceModel;

pub struct SourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts sources for a report.
    ///
    /// # Arguments
    /// - `sources`: Vector of a tuple containing the source type ID and optional specification
    pub async fn create_many(
        &self,
        field_report_id: i32,
        sources: Vec<(i32, Option<String>)>,
    ) -> Result<(), DbErr> {
        if sources.is_empty() {
            return Ok(());
        }

        let rows = sources
            .into_iter()
            .map(|(stype_id, spec)| entity::source::ActiveModel {
                field_report_id: ActiveValue::Set(field_report_id),
                stype_id: ActiveValue::Set(stype_id),
                spec: ActiveValue::Set(spec),
                ..Default::default()
            });

        entity::prelude::Source::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_field_report(&self, field_report_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Source::delete_many()
            .filter(entity::source::Column::FieldReportId.eq(field_report_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_by_field_report(
        &self,
        field_report_id: i32,
    ) -> Result<Vec<SourceModel>, DbErr> {
        entity::prelude::Source::find()
            .filter(entity::source::Column::FieldReportId.eq(field_report_id))
            .all(self.db)
            .await
    }
}
