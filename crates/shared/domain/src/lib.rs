//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `Role` and `UserProfile` entities, the shared `Record` capability,
//! their input types and the field-level validation rules.

pub mod constants;
pub mod error;
pub mod record;
pub mod role;
pub mod user_profile;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use record::{Record, RecordId};
pub use role::{NewRole, Role, RoleUpdate};
pub use user_profile::{NewUserProfile, UserProfile, UserProfileUpdate};
pub use validation::validate_input;
