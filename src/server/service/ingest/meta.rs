use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::field_report::{ActionsTakenPayload, ContactPayload, LooseId, SourcePayload},
    server::{
        data::{
            actions_taken::ActionsTakenRepository, contact::ContactRepository,
            source::SourceRepository, source_type::SourceTypeRepository,
        },
        error::ingest::{RelationWriteError, SecondaryStep},
        model::ingest::MetaCollections,
    },
};

/// Creates or replaces the records a field report owns: actions taken, contacts and sources.
///
/// Each of the three collections is written independently; a failure in one is recorded and
/// the others are still attempted.
pub struct MetaMaterializer<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetaMaterializer<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes every collection, returning one error per collection that failed.
    ///
    /// On update the existing records of all three collections are deleted first, including
    /// collections absent from the submission.
    pub async fn apply(
        &self,
        report_id: i32,
        meta: MetaCollections,
        is_update: bool,
    ) -> Vec<RelationWriteError> {
        let mut errors = Vec::new();

        if let Err(err) = self
            .replace_actions_taken(report_id, meta.actions_taken.unwrap_or_default(), is_update)
            .await
        {
            errors.push(RelationWriteError::new(
                SecondaryStep::ActionsTaken,
                report_id,
                err,
            ));
        }

        if let Err(err) = self
            .replace_contacts(report_id, meta.contacts.unwrap_or_default(), is_update)
            .await
        {
            errors.push(RelationWriteError::new(
                SecondaryStep::Contacts,
                report_id,
                err,
            ));
        }

        if let Err(err) = self
            .replace_sources(report_id, meta.sources.unwrap_or_default(), is_update)
            .await
        {
            errors.push(RelationWriteError::new(
                SecondaryStep::Sources,
                report_id,
                err,
            ));
        }

        errors
    }

    async fn replace_actions_taken(
        &self,
        report_id: i32,
        entries: Vec<ActionsTakenPayload>,
        is_update: bool,
    ) -> Result<(), DbErr> {
        let actions_taken_repo = ActionsTakenRepository::new(self.db);

        if is_update {
            actions_taken_repo.delete_by_field_report(report_id).await?;
        }

        for entry in entries {
            let action_ids: BTreeSet<i32> =
                entry.actions.iter().map(|LooseId(id)| *id).collect();

            let actions_taken = actions_taken_repo
                .create(report_id, entry.organization, entry.summary, entry.notes)
                .await?;

            actions_taken_repo
                .attach_actions(actions_taken.id, &action_ids)
                .await?;
        }

        Ok(())
    }

    async fn replace_contacts(
        &self,
        report_id: i32,
        contacts: Vec<ContactPayload>,
        is_update: bool,
    ) -> Result<(), DbErr> {
        let contact_repo = ContactRepository::new(self.db);

        if is_update {
            contact_repo.delete_by_field_report(report_id).await?;
        }

        contact_repo.create_many(report_id, contacts).await
    }

    async fn replace_sources(
        &self,
        report_id: i32,
        sources: Vec<SourcePayload>,
        is_update: bool,
    ) -> Result<(), DbErr> {
        let source_repo = SourceRepository::new(self.db);
        let source_type_repo = SourceTypeRepository::new(self.db);

        if is_update {
            source_repo.delete_by_field_report(report_id).await?;
        }

        let mut resolved = Vec::with_capacity(sources.len());
        for source in sources {
            let source_type = source_type_repo.get_or_create(&source.stype).await?;
            resolved.push((source_type.id, source.spec));
        }

        source_repo.create_many(report_id, resolved).await
    }
}
