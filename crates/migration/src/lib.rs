pub use sea_orm_migration::prelude::*;

mod m20240105_create_sis_tables;
mod m20240106_add_rule_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240105_create_sis_tables::Migration),
            Box::new(m20240106_add_rule_indexes::Migration),
        ]
    }
}
