use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{model::field_report::ContactPayload, server::model::db::ContactModel};

pub struct ContactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContactRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(
        &self,
        field_report_id: i32,
        contacts: Vec<ContactPayload>,
    ) -> Result<(), DbErr> {
        if contacts.is_empty() {
            return Ok(());
        }

        let rows = contacts
            .into_iter()
            .map(|contact| entity::field_report_contact::ActiveModel {
                field_report_id: ActiveValue::Set(field_report_id),
                ctype: ActiveValue::Set(contact.ctype),
                name: ActiveValue::Set(contact.name),
                title: ActiveValue::Set(contact.title),
                email: ActiveValue::Set(contact.email),
                phone: ActiveValue::Set(contact.phone),
                ..Default::default()
            });

        entity::prelude::FieldReportContact::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_field_report(&self, field_report_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FieldReportContact::delete_many()
            .filter(entity::field_report_contact::Column::FieldReportId.eq(field_report_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_by_field_report(
        &self,
        field_report_id: i32,
    ) -> Result<Vec<ContactModel>, DbErr> {
        entity::prelude::FieldReportContact::find()
            .filter(entity::field_report_contact::Column::FieldReportId.eq(field_report_id))
            .all(self.db)
            .await
    }
}
