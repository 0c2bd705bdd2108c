pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_packages_table;
mod m20250601_000003_create_orders_table;
mod m20250601_000004_create_settings_table;
mod m20250715_000005_add_reset_token_and_identity_index;
mod m20250802_000006_add_order_code_and_contact;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_packages_table::Migration),
            Box::new(m20250601_000003_create_orders_table::Migration),
            Box::new(m20250601_000004_create_settings_table::Migration),
            Box::new(m20250715_000005_add_reset_token_and_identity_index::Migration),
            Box::new(m20250802_000006_add_order_code_and_contact::Migration),
        ]
    }
}
