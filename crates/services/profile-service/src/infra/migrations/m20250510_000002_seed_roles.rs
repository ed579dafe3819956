//! Migration: Seed the fixed User, Admin and Moderator roles.
//!
//! Seed rows carry fixed ids, guids and a fixed audit timestamp. A seed id
//! that is already present is left untouched.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

use domain::{seed_timestamp, SEED_ROLES};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();
        let seeded_at = seed_timestamp();

        for &(id, guid, name) in SEED_ROLES {
            let id = id as i64;

            let existing = Query::select()
                .column(Roles::Id)
                .from(Roles::Table)
                .and_where(Expr::col(Roles::Id).eq(id))
                .to_owned();
            if db.query_one(backend.build(&existing)).await?.is_some() {
                continue;
            }

            let insert = Query::insert()
                .into_table(Roles::Table)
                .columns([
                    Roles::Id,
                    Roles::Name,
                    Roles::Guid,
                    Roles::CreatedOn,
                    Roles::UpdatedOn,
                ])
                .values([
                    id.into(),
                    name.into(),
                    guid.into(),
                    seeded_at.into(),
                    seeded_at.into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?
                .to_owned();
            db.execute(backend.build(&insert)).await?;
        }

        // Explicit ids bypass the Postgres sequence; move it past the seeds
        if backend == DbBackend::Postgres {
            db.execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('roles', 'id'), \
                 (SELECT COALESCE(MAX(id), 1) FROM roles))",
            )
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i64> = SEED_ROLES.iter().map(|&(id, _, _)| id as i64).collect();

        let delete = Query::delete()
            .from_table(Roles::Table)
            .and_where(Expr::col(Roles::Id).is_in(ids))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
    Name,
    Guid,
    CreatedOn,
    UpdatedOn,
}
