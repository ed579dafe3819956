//! Service layer - orchestration over the repositories.

mod profile_service;
mod role_service;

pub use profile_service::{ProfileManager, ProfileService};
pub use role_service::{RoleManager, RoleService};
