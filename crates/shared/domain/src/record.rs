//! Shared record capability.
//!
//! Every persisted entity carries a store-assigned id, a global identifier
//! and a pair of audit timestamps managed by the persistence layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Store-assigned, monotonic record identifier
pub type RecordId = u64;

/// Identity and audit fields shared by roles and user profiles.
pub trait Record {
    fn id(&self) -> RecordId;

    fn guid(&self) -> Uuid;

    fn created_on(&self) -> DateTime<Utc>;

    fn updated_on(&self) -> DateTime<Utc>;

    /// Whether the global identifier is set (the nil UUID means "unassigned")
    fn has_guid(&self) -> bool {
        !self.guid().is_nil()
    }
}
