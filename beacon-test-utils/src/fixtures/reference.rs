use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_USERNAME,
    error::TestError,
    model::{ActionModel, DisasterTypeModel, EventModel, SourceTypeModel, UserModel},
    TestSetup,
};

impl TestSetup {
    pub fn reference<'a>(&'a mut self) -> ReferenceFixtures<'a> {
        ReferenceFixtures { setup: self }
    }
}

pub struct ReferenceFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ReferenceFixtures<'a> {
    pub async fn insert_user(&self) -> Result<UserModel, TestError> {
        self.insert_user_named(TEST_USERNAME).await
    }

    pub async fn insert_user_named(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::BeaconUser::insert(entity::beacon_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_disaster_type(&self, name: &str) -> Result<DisasterTypeModel, TestError> {
        Ok(
            entity::prelude::DisasterType::insert(entity::disaster_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                summary: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_action(&self, name: &str) -> Result<ActionModel, TestError> {
        Ok(
            entity::prelude::Action::insert(entity::action::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                field_report_types: ActiveValue::Set("EVT,EW".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_source_type(&self, name: &str) -> Result<SourceTypeModel, TestError> {
        Ok(
            entity::prelude::SourceType::insert(entity::source_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a manually created (not auto-generated) event.
    pub async fn insert_event(&self, name: &str, dtype_id: i32) -> Result<EventModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                dtype_id: ActiveValue::Set(dtype_id),
                disaster_start_date: ActiveValue::Set(None),
                auto_generated: ActiveValue::Set(false),
                auto_generated_source: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert the user and disaster type every field report submission requires.
    pub async fn insert_submitter(&self) -> Result<(UserModel, DisasterTypeModel), TestError> {
        let user = self.insert_user().await?;
        let dtype = self.insert_disaster_type("Flood").await?;

        Ok((user, dtype))
    }
}
