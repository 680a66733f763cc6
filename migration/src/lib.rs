pub use sea_orm_migration::prelude::*;

mod m20261015_000001_geography;
mod m20261015_000002_disaster_type_and_user;
mod m20261015_000003_event;
mod m20261015_000004_field_report;
mod m20261015_000005_actions_taken;
mod m20261015_000006_field_report_contact;
mod m20261015_000007_source;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261015_000001_geography::Migration),
            Box::new(m20261015_000002_disaster_type_and_user::Migration),
            Box::new(m20261015_000003_event::Migration),
            Box::new(m20261015_000004_field_report::Migration),
            Box::new(m20261015_000005_actions_taken::Migration),
            Box::new(m20261015_000006_field_report_contact::Migration),
            Box::new(m20261015_000007_source::Migration),
        ]
    }
}
