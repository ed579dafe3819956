//! Profile Service Library
//!
//! User profiles and the roles they belong to, persisted with SeaORM.
//! The binary in `main.rs` drives it from the command line; other hosts
//! build [`Services`] over their own connection.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use domain::{Record, Role, UserProfile};

use crate::config::ProfileServiceConfig;
use crate::infra::Database;
use crate::repository::{ProfileStore, RoleStore};
use crate::service::{ProfileManager, ProfileService, RoleManager, RoleService};

/// Role and profile services sharing one connection pool.
#[derive(Clone)]
pub struct Services {
    pub roles: Arc<dyn RoleService>,
    pub profiles: Arc<dyn ProfileService>,
}

impl Services {
    /// Wire stores and services over `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let role_repo = Arc::new(RoleStore::new(db.clone()));
        let profile_repo = Arc::new(ProfileStore::new(db));

        Self {
            roles: Arc::new(RoleManager::new(role_repo.clone())),
            profiles: Arc::new(ProfileManager::new(role_repo, profile_repo)),
        }
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &ProfileServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Verify the database is reachable.
pub async fn check_database(config: &ProfileServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!(service = %config.service.service_name, "Database reachable");
    Ok(())
}

/// Connect, apply pending migrations and build the services.
pub async fn connect_services(
    config: &ProfileServiceConfig,
) -> Result<Services, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    Ok(Services::new(db.get_connection()))
}

/// Leading columns shared by every listed row: id, guid and last update.
fn format_record<R: Record>(record: &R) -> String {
    let guid = if record.has_guid() {
        record.guid().to_string()
    } else {
        "-".to_string()
    };
    format!(
        "{:>4}  {:<36}  {}",
        record.id(),
        guid,
        record.updated_on().format("%Y-%m-%d %H:%M:%S")
    )
}

/// One line per role.
pub fn format_role(role: &Role) -> String {
    format!("{}  {}", format_record(role), role.name)
}

/// One line per profile, with the role name when it was loaded.
pub fn format_profile(profile: &UserProfile) -> String {
    let role = profile
        .role
        .as_ref()
        .map_or_else(|| format!("#{}", profile.role_id), |r| r.name.clone());
    format!(
        "{}  {:<20}  {:<30}  {}",
        format_record(profile),
        profile.name,
        profile.email,
        role
    )
}
