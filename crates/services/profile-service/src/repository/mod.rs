//! Repository layer for data access.
//!
//! Repositories enforce the uniqueness rules the schema cannot express on its
//! own and translate storage constraint violations into application errors.

pub mod audit;
pub mod entities;
mod profile_repository;
mod role_repository;

pub use profile_repository::{ProfileRepository, ProfileStore};
pub use role_repository::{RoleRepository, RoleStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;

use sea_orm::{DbErr, SqlErr};

/// Storage constraint that rejected a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConstraintViolation {
    /// Unique constraint, with the driver message naming the column or index
    Unique(String),
    ForeignKey(String),
}

impl ConstraintViolation {
    /// Classify a database error as a constraint violation, if it is one.
    pub(crate) fn from_db_err(err: &DbErr) -> Option<Self> {
        match err.sql_err()? {
            SqlErr::UniqueConstraintViolation(msg) => Some(Self::Unique(msg)),
            SqlErr::ForeignKeyConstraintViolation(msg) => Some(Self::ForeignKey(msg)),
            _ => None,
        }
    }

    /// Whether the violated constraint concerns `column`
    pub(crate) fn concerns(&self, column: &str) -> bool {
        match self {
            Self::Unique(msg) | Self::ForeignKey(msg) => msg.contains(column),
        }
    }
}
