//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250510_000001_create_roles_and_user_profiles;
mod m20250510_000002_seed_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250510_000001_create_roles_and_user_profiles::Migration),
            Box::new(m20250510_000002_seed_roles::Migration),
        ]
    }
}
