//! Role domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{seed_timestamp, SEED_ROLES};
use crate::record::{Record, RecordId};

/// Role domain entity.
///
/// A named permission category referenced by user profiles. Roles never
/// carry their profiles; the relation is navigable from the profile side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RecordId,
    pub guid: Uuid,
    pub name: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Role {
    /// The roles seeded at schema initialization, with their fixed ids,
    /// guids and creation timestamp.
    pub fn seeded() -> Vec<Role> {
        let created_on = seed_timestamp();
        SEED_ROLES
            .iter()
            .map(|&(id, guid, name)| Role {
                id,
                guid,
                name: name.to_string(),
                created_on,
                updated_on: created_on,
            })
            .collect()
    }
}

impl Record for Role {
    fn id(&self) -> RecordId {
        self.id
    }

    fn guid(&self) -> Uuid {
        self.guid
    }

    fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    fn updated_on(&self) -> DateTime<Utc> {
        self.updated_on
    }
}

/// Role creation data transfer object.
///
/// A nil `guid` is accepted and skips the guid uniqueness check.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    #[serde(default)]
    pub guid: Uuid,
    /// Role name (1-50 characters, unique)
    #[validate(length(
        min = 1,
        max = 50,
        message = "Role name is required and cannot be longer than 50 characters."
    ))]
    pub name: String,
}

impl NewRole {
    /// Create a role request with a freshly generated guid
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Create a role request with an explicit guid (may be nil)
    pub fn with_guid(name: impl Into<String>, guid: Uuid) -> Self {
        Self {
            guid,
            name: name.into(),
        }
    }
}

/// Role update data transfer object. Only the name is applied.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub id: RecordId,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Role name is required and cannot be longer than 50 characters."
    ))]
    pub name: String,
}

impl RoleUpdate {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
