//! User profile repository implementation.
//!
//! Reads load the associated role eagerly; writes return the stored row
//! without it, so callers re-fetch through `get_by_id` to see the role.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbBackend, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};

use super::entities::db_id;
use super::entities::role::Entity as RoleEntity;
use super::entities::user_profile::{self, ActiveModel, Entity as UserProfileEntity};
use super::ConstraintViolation;
use common::{AppError, AppResult, OptionExt};
use domain::{NewUserProfile, RecordId, Role, UserProfile, UserProfileUpdate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const DUPLICATE_IDENTITY: &str = "UserProfile with this Id or Guid already exists.";

/// User profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID with its role; fails with `NotFound` when absent
    async fn get_by_id(&self, id: RecordId) -> AppResult<UserProfile>;

    /// List all profiles with their roles, ordered by id
    async fn get_all(&self) -> AppResult<Vec<UserProfile>>;

    /// Create a profile after checking identity and email uniqueness
    async fn create(&self, profile: NewUserProfile) -> AppResult<UserProfile>;

    /// Replace the mutable fields of an existing profile
    async fn update(&self, update: UserProfileUpdate) -> AppResult<UserProfile>;
}

/// Concrete implementation of ProfileRepository
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a profile holding `email`, other than `exclude_id`
    async fn find_email_holder(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<Option<user_profile::Model>> {
        let mut query = UserProfileEntity::find().filter(user_profile::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(user_profile::Column::Id.ne(id));
        }

        query.one(&self.db).await.map_err(AppError::from)
    }
}

fn email_conflict(email: &str) -> AppError {
    AppError::conflict(format!("Another user profile with the email '{}'", email))
}

fn missing_role(role_id: RecordId) -> AppError {
    AppError::not_found(format!("Role with Id '{}' does not exist", role_id))
}

/// Translate constraint rejections that slipped past the pre-write checks.
fn translate_write_error(err: DbErr, email: &str, role_id: RecordId) -> AppError {
    match ConstraintViolation::from_db_err(&err) {
        Some(ConstraintViolation::ForeignKey(_)) => missing_role(role_id),
        Some(violation) if violation.concerns("email") => email_conflict(email),
        // Remaining unique keys are the identity: primary key or guid
        Some(ConstraintViolation::Unique(_)) => AppError::duplicate_identity(DUPLICATE_IDENTITY),
        None => AppError::from(err),
    }
}

/// Statement moving the id sequence past explicitly inserted ids.
///
/// Only Postgres needs it: SQLite `AUTOINCREMENT` already tracks the
/// largest id ever inserted.
fn sync_id_sequence(backend: DbBackend) -> Option<Statement> {
    match backend {
        DbBackend::Postgres => Some(Statement::from_string(
            backend,
            "SELECT setval(pg_get_serial_sequence('user_profiles', 'id'), \
             GREATEST((SELECT COALESCE(MAX(id), 0) FROM user_profiles), 1))",
        )),
        _ => None,
    }
}

fn with_role(pair: (user_profile::Model, Option<super::entities::RoleModel>)) -> UserProfile {
    let (profile, role) = pair;
    UserProfile::from(profile).with_role(role.map(Role::from))
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn get_by_id(&self, id: RecordId) -> AppResult<UserProfile> {
        let not_found = format!("User Profile with Id '{}' does not exist.", id);
        let db_id = db_id(id).ok_or_not_found(not_found.clone())?;

        let result = UserProfileEntity::find_by_id(db_id)
            .find_also_related(RoleEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(with_role).ok_or_not_found(not_found)
    }

    async fn get_all(&self) -> AppResult<Vec<UserProfile>> {
        let rows = UserProfileEntity::find()
            .find_also_related(RoleEntity)
            .order_by_asc(user_profile::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(with_role).collect())
    }

    async fn create(&self, profile: NewUserProfile) -> AppResult<UserProfile> {
        // Id 0 is "unset": the store assigns one
        let requested_id = match profile.id.filter(|&id| id != 0) {
            Some(id) => Some(
                db_id(id).ok_or_else(|| AppError::validation("Id is out of range."))?,
            ),
            None => None,
        };

        // Identity reuse: either the requested id or the guid, in one query
        let mut identity = Condition::any().add(user_profile::Column::Guid.eq(profile.guid));
        if let Some(id) = requested_id {
            identity = identity.add(user_profile::Column::Id.eq(id));
        }

        let existing = UserProfileEntity::find()
            .filter(identity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        if existing.is_some() {
            tracing::warn!(guid = %profile.guid, id = ?profile.id, "Rejected profile with reused identity");
            return Err(AppError::duplicate_identity(DUPLICATE_IDENTITY));
        }

        if self.find_email_holder(&profile.email, None).await?.is_some() {
            tracing::warn!(email = %profile.email, "Rejected profile with duplicate email");
            return Err(email_conflict(&profile.email));
        }

        let role_id = db_id(profile.role_id).ok_or_else(|| missing_role(profile.role_id))?;

        let active_model = ActiveModel {
            id: requested_id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: Set(profile.name),
            email: Set(profile.email.clone()),
            bio: Set(profile.bio),
            role_id: Set(role_id),
            receive_newsletter: Set(profile.receive_newsletter),
            guid: Set(profile.guid),
            ..Default::default()
        };

        let txn = self.db.begin().await?;

        let model = active_model
            .insert(&txn)
            .await
            .map_err(|e| translate_write_error(e, &profile.email, profile.role_id))?;

        if requested_id.is_some() {
            if let Some(stmt) = sync_id_sequence(txn.get_database_backend()) {
                txn.execute(stmt).await?;
            }
        }

        txn.commit().await?;

        tracing::debug!(profile_id = model.id, role_id = model.role_id, "User profile created");
        Ok(UserProfile::from(model))
    }

    async fn update(&self, update: UserProfileUpdate) -> AppResult<UserProfile> {
        let not_found = format!("User Profile with Id '{}' does not exist.", update.id);
        let id = db_id(update.id).ok_or_not_found(not_found.clone())?;

        let profile = UserProfileEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(not_found)?;

        if self.find_email_holder(&update.email, Some(id)).await?.is_some() {
            tracing::warn!(profile_id = id, email = %update.email, "Rejected update to existing email");
            return Err(email_conflict(&update.email));
        }

        let role_id = db_id(update.role_id).ok_or_else(|| missing_role(update.role_id))?;

        let mut active: ActiveModel = profile.into();
        active.name = Set(update.name);
        active.email = Set(update.email.clone());
        active.bio = Set(update.bio);
        active.role_id = Set(role_id);
        active.receive_newsletter = Set(update.receive_newsletter);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| translate_write_error(e, &update.email, update.role_id))?;

        tracing::debug!(profile_id = model.id, role_id = model.role_id, "User profile updated");
        Ok(UserProfile::from(model))
    }
}
