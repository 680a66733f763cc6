use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::EventModel;

/// Tag stored on events synthesized for a field report submitted without one.
pub static AUTO_GENERATED_SOURCE: &str = "New field report";

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an event flagged as auto-generated from a new field report.
    pub async fn create_auto_generated(
        &self,
        name: String,
        dtype_id: i32,
        disaster_start_date: Option<NaiveDateTime>,
    ) -> Result<EventModel, DbErr> {
        let now = Utc::now().naive_utc();

        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(name),
            dtype_id: ActiveValue::Set(dtype_id),
            disaster_start_date: ActiveValue::Set(disaster_start_date),
            auto_generated: ActiveValue::Set(true),
            auto_generated_source: ActiveValue::Set(Some(AUTO_GENERATED_SOURCE.to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<EventModel>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }
}
