pub use sea_orm_migration::prelude::*;

mod m20250601_090000_create_jobs_table;
mod m20250601_090100_create_candidate_follows_table;
mod m20250601_090200_create_candidate_views_table;
mod m20250601_090300_create_reports_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_090000_create_jobs_table::Migration),
            Box::new(m20250601_090100_create_candidate_follows_table::Migration),
            Box::new(m20250601_090200_create_candidate_views_table::Migration),
            Box::new(m20250601_090300_create_reports_table::Migration),
        ]
    }
}
