use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::SourceTypeModel;

pub struct SourceTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SourceTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the source type with exactly this name, creating it first if needed.
    ///
    /// The insert is skipped on a name conflict and the row is then re-read, so two
    /// submissions racing to create the same name both end up with the one stored row.
    pub async fn get_or_create(&self, name: &str) -> Result<SourceTypeModel, DbErr> {
        let source_type = entity::source_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        match entity::prelude::SourceType::insert(source_type)
            .on_conflict(
                OnConflict::column(entity::source_type::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
        {
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(err) => return Err(err),
        }

        self.get_by_name(name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("source type {:?}", name)))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<SourceTypeModel>, DbErr> {
        entity::prelude::SourceType::find()
            .filter(entity::source_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
