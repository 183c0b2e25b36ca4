pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_quote;
mod m20250110_000002_create_td_quote;
mod m20250110_000003_create_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_quote::Migration),
            Box::new(m20250110_000002_create_td_quote::Migration),
            Box::new(m20250110_000003_create_user::Migration),
        ]
    }
}
