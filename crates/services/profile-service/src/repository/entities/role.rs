//! Role database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Role;

use super::record_id;
use crate::repository::audit::{self, AuditColumns};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub guid: Uuid,
    pub created_on: DateTimeUtc,
    pub updated_on: DateTimeUtc,
}

/// Roles do not navigate to their profiles; the relation is declared on the profile side.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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

/// Convert database model to domain entity
impl From<Model> for Role {
    fn from(model: Model) -> Self {
        Role {
            id: record_id(model.id),
            guid: model.guid,
            name: model.name,
            created_on: model.created_on,
            updated_on: model.updated_on,
        }
    }
}
