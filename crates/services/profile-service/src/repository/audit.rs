//! Audit timestamp maintenance.
//!
//! Every entity that declares its audit columns through [`AuditColumns`] has
//! them stamped from its `before_save` hook, so callers never set them.
//!
//! - insert: `created_on = updated_on = now`
//! - update: `updated_on = now`, and `created_on` is never written
//! - update with no pending changes: untouched

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait};

/// Active models carrying `created_on` / `updated_on` audit columns.
pub trait AuditColumns: ActiveModelTrait {
    fn created_on_column() -> <Self::Entity as EntityTrait>::Column;

    fn updated_on_column() -> <Self::Entity as EntityTrait>::Column;
}

/// Stamp audit columns with the current UTC time.
pub fn stamp<A: AuditColumns>(model: A, insert: bool) -> A {
    stamp_at(model, insert, Utc::now())
}

/// Stamp audit columns with an explicit instant.
pub fn stamp_at<A: AuditColumns>(mut model: A, insert: bool, now: DateTime<Utc>) -> A {
    if insert {
        model.set(A::created_on_column(), now.into());
        model.set(A::updated_on_column(), now.into());
    } else if model.is_changed() {
        // Drop any caller-supplied creation time so the stored one survives
        model.not_set(A::created_on_column());
        model.set(A::updated_on_column(), now.into());
    }
    model
}
