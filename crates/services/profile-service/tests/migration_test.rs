//! Integration tests for schema migrations and role seeding.

use sea_orm_migration::MigratorTrait;

use domain::{seed_timestamp, Role, SEED_ROLES};
use profile_service_lib::infra::{Database, Migrator};
use profile_service_lib::repository::{RoleRepository, RoleStore};

#[tokio::test]
async fn test_all_migrations_applied() {
    let db = Database::in_memory().await.unwrap();

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), Migrator::migrations().len());
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_seed_roles_carry_fixed_identity() {
    let db = Database::in_memory().await.unwrap();
    let repo = RoleStore::new(db.get_connection());

    for &(id, guid, name) in SEED_ROLES {
        let role = repo.get_by_id(id).await.unwrap().expect("seeded role");
        assert_eq!(role.guid, guid);
        assert_eq!(role.name, name);
        assert_eq!(role.created_on, seed_timestamp());
        assert_eq!(role.updated_on, seed_timestamp());
    }
}

#[tokio::test]
async fn test_seed_is_reapplied_after_rollback() {
    let db = Database::in_memory().await.unwrap();
    let repo = RoleStore::new(db.get_connection());

    db.rollback_migration().await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());

    db.run_migrations().await.unwrap();
    assert_eq!(repo.get_all().await.unwrap(), Role::seeded());
}

#[tokio::test]
async fn test_rerunning_migrations_keeps_seeds_single() {
    let db = Database::in_memory().await.unwrap();

    db.run_migrations().await.unwrap();

    let repo = RoleStore::new(db.get_connection());
    assert_eq!(repo.get_all().await.unwrap().len(), SEED_ROLES.len());
}

#[tokio::test]
async fn test_ping() {
    let db = Database::in_memory().await.unwrap();

    db.ping().await.unwrap();
}
