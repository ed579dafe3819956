//! User profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::UserProfile;

use super::record_id;
use crate::repository::audit::{self, AuditColumns};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub bio: Option<String>,
    pub role_id: i64,
    pub receive_newsletter: bool,
    #[sea_orm(unique)]
    pub guid: Uuid,
    pub created_on: DateTimeUtc,
    pub updated_on: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(audit::stamp(self, insert))
    }
}

impl AuditColumns for ActiveModel {
    fn created_on_column() -> Column {
        Column::CreatedOn
    }

    fn updated_on_column() -> Column {
        Column::UpdatedOn
    }
}

/// Convert database model to domain entity. The role is left unpopulated.
impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        UserProfile {
            id: record_id(model.id),
            guid: model.guid,
            name: model.name,
            email: model.email,
            bio: model.bio,
            role_id: record_id(model.role_id),
            role: None,
            receive_newsletter: model.receive_newsletter,
            created_on: model.created_on,
            updated_on: model.updated_on,
        }
    }
}
