pub use sea_orm_migration::prelude::*;

mod m20260801_000001_user;
mod m20260801_000002_facility;
mod m20260801_000003_event;
mod m20260801_000004_reservation;
mod m20260801_000005_enrollment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_user::Migration),
            Box::new(m20260801_000002_facility::Migration),
            Box::new(m20260801_000003_event::Migration),
            Box::new(m20260801_000004_reservation::Migration),
            Box::new(m20260801_000005_enrollment::Migration),
        ]
    }
}
