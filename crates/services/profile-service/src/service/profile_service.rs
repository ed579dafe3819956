//! Profile service - business logic spanning profiles and roles.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{validate_input, NewUserProfile, RecordId, UserProfile, UserProfileUpdate};

use crate::repository::{ProfileRepository, RoleRepository};

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Get profile by ID, with its role
    async fn get_profile(&self, id: RecordId) -> AppResult<UserProfile>;

    /// List all profiles, with their roles
    async fn list_profiles(&self) -> AppResult<Vec<UserProfile>>;

    /// Create a new profile attached to an existing role
    async fn create_profile(&self, profile: NewUserProfile) -> AppResult<UserProfile>;

    /// Update a profile; the target role must exist
    async fn update_profile(&self, update: UserProfileUpdate) -> AppResult<UserProfile>;
}

/// Concrete implementation of ProfileService using repositories.
pub struct ProfileManager {
    roles: Arc<dyn RoleRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileManager {
    /// Create new profile service instance with repositories
    pub fn new(roles: Arc<dyn RoleRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { roles, profiles }
    }

    async fn ensure_role_exists(&self, role_id: RecordId, action: &str) -> AppResult<()> {
        if self.roles.get_by_id(role_id).await?.is_none() {
            tracing::warn!(role_id, "Profile references a missing role");
            return Err(AppError::not_found(format!(
                "Role with Id '{}' does not exist. Cannot {} user profile.",
                role_id, action
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileService for ProfileManager {
    async fn get_profile(&self, id: RecordId) -> AppResult<UserProfile> {
        self.profiles.get_by_id(id).await
    }

    async fn list_profiles(&self) -> AppResult<Vec<UserProfile>> {
        self.profiles.get_all().await
    }

    async fn create_profile(&self, profile: NewUserProfile) -> AppResult<UserProfile> {
        validate_input(&profile)?;
        self.ensure_role_exists(profile.role_id, "create").await?;

        let created = self.profiles.create(profile).await?;
        tracing::info!(profile_id = created.id, role_id = created.role_id, "User profile registered");
        Ok(created)
    }

    async fn update_profile(&self, update: UserProfileUpdate) -> AppResult<UserProfile> {
        validate_input(&update)?;
        self.ensure_role_exists(update.role_id, "update").await?;

        self.profiles.update(update).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::repository::{MockProfileRepository, MockRoleRepository};
    use domain::Role;

    fn create_test_role(id: RecordId) -> Role {
        let now = Utc::now();
        Role {
            id,
            guid: Uuid::new_v4(),
            name: "Admin".to_string(),
            created_on: now,
            updated_on: now,
        }
    }

    fn create_test_profile(id: RecordId, role_id: RecordId) -> UserProfile {
        let now = Utc::now();
        UserProfile {
            id,
            guid: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            bio: None,
            role_id,
            role: None,
            receive_newsletter: false,
            created_on: now,
            updated_on: now,
        }
    }

    fn roles_with(role_id: RecordId, exists: bool) -> MockRoleRepository {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_get_by_id()
            .with(eq(role_id))
            .returning(move |id| Ok(exists.then(|| create_test_role(id))));
        roles
    }

    #[tokio::test]
    async fn test_create_profile_with_existing_role() {
        let roles = roles_with(2, true);
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_create()
            .times(1)
            .returning(|p| Ok(create_test_profile(1, p.role_id)));

        let service = ProfileManager::new(Arc::new(roles), Arc::new(profiles));
        let profile = service
            .create_profile(NewUserProfile::new("Alice", "alice@example.com", 2))
            .await
            .unwrap();

        assert_eq!(profile.role_id, 2);
    }

    #[tokio::test]
    async fn test_create_profile_missing_role_never_reaches_profiles() {
        let roles = roles_with(999, false);
        let mut profiles = MockProfileRepository::new();
        profiles.expect_create().never();

        let service = ProfileManager::new(Arc::new(roles), Arc::new(profiles));
        let result = service
            .create_profile(NewUserProfile::new("Alice", "alice@example.com", 999))
            .await;

        match result {
            Err(AppError::NotFound(msg)) => {
                assert_eq!(msg, "Role with Id '999' does not exist. Cannot create user profile.")
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_profile_invalid_email_skips_repositories() {
        let mut roles = MockRoleRepository::new();
        roles.expect_get_by_id().never();
        let mut profiles = MockProfileRepository::new();
        profiles.expect_create().never();

        let service = ProfileManager::new(Arc::new(roles), Arc::new(profiles));
        let result = service
            .create_profile(NewUserProfile::new("Alice", "not-an-email", 2))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_profile_missing_role_is_not_found() {
        let roles = roles_with(999, false);
        let mut profiles = MockProfileRepository::new();
        profiles.expect_update().never();

        let service = ProfileManager::new(Arc::new(roles), Arc::new(profiles));
        let mut update = UserProfileUpdate::from(&create_test_profile(1, 2));
        update.role_id = 999;

        let result = service.update_profile(update).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_profile_propagates_conflict() {
        let roles = roles_with(2, true);
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_update()
            .returning(|u| Err(AppError::conflict(format!("Another user profile with the email '{}'", u.email))));

        let service = ProfileManager::new(Arc::new(roles), Arc::new(profiles));
        let update = UserProfileUpdate::from(&create_test_profile(1, 2));

        let result = service.update_profile(update).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_profile_passes_through_not_found() {
        let roles = MockRoleRepository::new();
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_get_by_id()
            .with(eq(7))
            .returning(|id| Err(AppError::not_found(format!("User Profile with Id '{}' does not exist.", id))));

        let service = ProfileManager::new(Arc::new(roles), Arc::new(profiles));
        let result = service.get_profile(7).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
