//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod role;
pub mod user_profile;

pub use role::{ActiveModel as RoleActiveModel, Entity as RoleEntity, Model as RoleModel};
pub use user_profile::{
    ActiveModel as UserProfileActiveModel, Entity as UserProfileEntity,
    Model as UserProfileModel,
};

use domain::RecordId;

/// Convert a domain id into a column value; ids beyond `i64::MAX` cannot exist in the store.
pub(crate) fn db_id(id: RecordId) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Convert a stored id back into a domain id. Stored ids are always positive.
pub(crate) fn record_id(id: i64) -> RecordId {
    id.max(0) as RecordId
}
