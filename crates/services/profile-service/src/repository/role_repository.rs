//! Role repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::role::{self, ActiveModel, Entity as RoleEntity};
use super::entities::db_id;
use super::ConstraintViolation;
use common::{AppError, AppResult, OptionExt};
use domain::{NewRole, RecordId, Role, RoleUpdate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by ID; a missing role is `None`, not an error
    async fn get_by_id(&self, id: RecordId) -> AppResult<Option<Role>>;

    /// List all roles, ordered by id
    async fn get_all(&self) -> AppResult<Vec<Role>>;

    /// Create a role after checking guid and name uniqueness
    async fn create(&self, role: NewRole) -> AppResult<Role>;

    /// Rename an existing role
    async fn update(&self, update: RoleUpdate) -> AppResult<Role>;
}

/// Concrete implementation of RoleRepository
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<role::Model>> {
        RoleEntity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

/// Translate a unique-index rejection on the name into the conflict the
/// pre-write check would have reported.
fn name_conflict(err: DbErr, name: &str) -> AppError {
    match ConstraintViolation::from_db_err(&err) {
        Some(violation) if violation.concerns("name") => {
            AppError::conflict(format!("Role with name '{}'", name))
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn get_by_id(&self, id: RecordId) -> AppResult<Option<Role>> {
        let Some(id) = db_id(id) else {
            return Ok(None);
        };

        let result = RoleEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Role::from))
    }

    async fn get_all(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Role::from).collect())
    }

    async fn create(&self, role: NewRole) -> AppResult<Role> {
        // A nil guid means "unassigned" and is never checked
        if !role.guid.is_nil() {
            let by_guid = RoleEntity::find()
                .filter(role::Column::Guid.eq(role.guid))
                .one(&self.db)
                .await
                .map_err(AppError::from)?;

            if by_guid.is_some() {
                tracing::warn!(guid = %role.guid, "Rejected role with duplicate guid");
                return Err(AppError::conflict(format!("Role with guid '{}'", role.guid)));
            }
        }

        if self.find_by_name(&role.name).await?.is_some() {
            tracing::warn!(name = %role.name, "Rejected role with duplicate name");
            return Err(AppError::conflict(format!("Role with name '{}'", role.name)));
        }

        let active_model = ActiveModel {
            name: Set(role.name.clone()),
            guid: Set(role.guid),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| name_conflict(e, &role.name))?;

        tracing::debug!(role_id = model.id, name = %model.name, "Role created");
        Ok(Role::from(model))
    }

    async fn update(&self, update: RoleUpdate) -> AppResult<Role> {
        let not_found = format!("Role with Id '{}' does not exist", update.id);
        let id = db_id(update.id).ok_or_not_found(not_found.clone())?;

        let role = RoleEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(not_found)?;

        let same_name = RoleEntity::find()
            .filter(role::Column::Name.eq(update.name.as_str()))
            .filter(role::Column::Id.ne(id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        if same_name.is_some() {
            tracing::warn!(role_id = id, name = %update.name, "Rejected rename to existing role name");
            return Err(AppError::conflict(format!(
                "Another role with the name '{}'",
                update.name
            )));
        }

        let mut active: ActiveModel = role.into();
        active.name = Set(update.name.clone());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| name_conflict(e, &update.name))?;

        tracing::debug!(role_id = model.id, name = %model.name, "Role updated");
        Ok(Role::from(model))
    }
}
