use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::DisasterTypeModel;

pub struct DisasterTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DisasterTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, dtype_id: i32) -> Result<Option<DisasterTypeModel>, DbErr> {
        entity::prelude::DisasterType::find_by_id(dtype_id)
            .one(self.db)
            .await
    }
}
