use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::ActionsTakenModel;

pub struct ActionsTakenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActionsTakenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        field_report_id: i32,
        organization: Option<String>,
        summary: Option<String>,
        notes: Option<String>,
    ) -> Result<ActionsTakenModel, DbErr> {
        let actions_taken = entity::actions_taken::ActiveModel {
            field_report_id: ActiveValue::Set(field_report_id),
            organization: ActiveValue::Set(organization),
            summary: ActiveValue::Set(summary),
            notes: ActiveValue::Set(notes),
            ..Default::default()
        };

        actions_taken.insert(self.db).await
    }

    /// Links catalog actions to an actions taken record.
    ///
    /// # Notes
    /// - Action IDs must exist in the action table due to foreign key constraint
    pub async fn attach_actions(
        &self,
        actions_taken_id: i32,
        action_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        if action_ids.is_empty() {
            return Ok(());
        }

        let rows = action_ids
            .iter()
            .map(|action_id| entity::actions_taken_action::ActiveModel {
                actions_taken_id: ActiveValue::Set(actions_taken_id),
                action_id: ActiveValue::Set(*action_id),
            });

        entity::prelude::ActionsTakenAction::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every actions taken record of a report along with its catalog links.
    pub async fn delete_by_field_report(&self, field_report_id: i32) -> Result<u64, DbErr> {
        let existing_ids: Vec<i32> = self
            .get_by_field_report(field_report_id)
            .await?
            .into_iter()
            .map(|actions_taken| actions_taken.id)
            .collect();

        if existing_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::ActionsTakenAction::delete_many()
            .filter(entity::actions_taken_action::Column::ActionsTakenId.is_in(existing_ids))
            .exec(self.db)
            .await?;

        let result = entity::prelude::ActionsTaken::delete_many()
            .filter(entity::actions_taken::Column::FieldReportId.eq(field_report_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_by_field_report(
        &self,
        field_report_id: i32,
    ) -> Result<Vec<ActionsTakenModel>, DbErr> {
        entity::prelude::ActionsTaken::find()
            .filter(entity::actions_taken::Column::FieldReportId.eq(field_report_id))
            .all(self.db)
            .await
    }

    pub async fn get_action_ids(&self, actions_taken_id: i32) -> Result<BTreeSet<i32>, DbErr> {
        Ok(entity::prelude::ActionsTakenAction::find()
            .filter(entity::actions_taken_action::Column::ActionsTakenId.eq(actions_taken_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.action_id)
            .collect())
    }
}
