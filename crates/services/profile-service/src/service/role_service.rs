//! Role service - validates role input and delegates to the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{validate_input, NewRole, RecordId, Role, RoleUpdate};

use crate::repository::RoleRepository;

/// Role service trait for dependency injection.
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Get role by ID; `None` when it does not exist
    async fn get_role(&self, id: RecordId) -> AppResult<Option<Role>>;

    /// List all roles
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Create a new role
    async fn create_role(&self, role: NewRole) -> AppResult<Role>;

    /// Rename an existing role
    async fn update_role(&self, update: RoleUpdate) -> AppResult<Role>;
}

/// Concrete implementation of RoleService using repository.
pub struct RoleManager {
    roles: Arc<dyn RoleRepository>,
}

impl RoleManager {
    /// Create new role service instance with repository
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl RoleService for RoleManager {
    async fn get_role(&self, id: RecordId) -> AppResult<Option<Role>> {
        self.roles.get_by_id(id).await
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.roles.get_all().await
    }

    async fn create_role(&self, role: NewRole) -> AppResult<Role> {
        validate_input(&role)?;
        self.roles.create(role).await
    }

    async fn update_role(&self, update: RoleUpdate) -> AppResult<Role> {
        validate_input(&update)?;
        self.roles.update(update).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::repository::MockRoleRepository;
    use common::AppError;

    fn create_test_role(id: RecordId, name: &str) -> Role {
        let now = Utc::now();
        Role {
            id,
            guid: Uuid::new_v4(),
            name: name.to_string(),
            created_on: now,
            updated_on: now,
        }
    }

    #[tokio::test]
    async fn test_get_role_passes_through_missing() {
        let mut repo = MockRoleRepository::new();
        repo.expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = RoleManager::new(Arc::new(repo));
        let result = service.get_role(42).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_roles() {
        let mut repo = MockRoleRepository::new();
        repo.expect_get_all().returning(|| {
            Ok(vec![
                create_test_role(1, "User"),
                create_test_role(2, "Admin"),
            ])
        });

        let service = RoleManager::new(Arc::new(repo));
        let roles = service.list_roles().await.unwrap();

        assert_eq!(roles.len(), 2);
    }

    #[tokio::test]
    async fn test_create_role_rejects_invalid_name_before_repository() {
        let mut repo = MockRoleRepository::new();
        repo.expect_create().never();

        let service = RoleManager::new(Arc::new(repo));
        let result = service.create_role(NewRole::new("x".repeat(51))).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_role_propagates_conflict() {
        let mut repo = MockRoleRepository::new();
        repo.expect_create()
            .returning(|role| Err(AppError::conflict(format!("Role with name '{}'", role.name))));

        let service = RoleManager::new(Arc::new(repo));
        let result = service.create_role(NewRole::new("Admin")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_role_delegates() {
        let mut repo = MockRoleRepository::new();
        repo.expect_update()
            .returning(|update| Ok(create_test_role(update.id, &update.name)));

        let service = RoleManager::new(Arc::new(repo));
        let role = service.update_role(RoleUpdate::new(3, "Reviewer")).await.unwrap();

        assert_eq!(role.id, 3);
        assert_eq!(role.name, "Reviewer");
    }
}
