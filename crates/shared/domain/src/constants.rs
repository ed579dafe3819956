//! Domain-level constants.
//!
//! These constants define the seeded roles and the audit baseline they carry.

use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Seeded Roles
// =============================================================================

/// Id of the default role for regular users
pub const ROLE_USER_ID: u64 = 1;

/// Id of the administrator role
pub const ROLE_ADMIN_ID: u64 = 2;

/// Id of the moderator role
pub const ROLE_MODERATOR_ID: u64 = 3;

pub const ROLE_USER: &str = "User";
pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_MODERATOR: &str = "Moderator";

pub const ROLE_USER_GUID: Uuid = Uuid::from_u128(0xa1b2c3d4_e5f6_7788_99a0_bcdef1234567);
pub const ROLE_ADMIN_GUID: Uuid = Uuid::from_u128(0xb2c3d4e5_f6a7_8899_a0b1_cdef12345678);
pub const ROLE_MODERATOR_GUID: Uuid = Uuid::from_u128(0xc3d4e5f6_a7b8_99a0_b1c2_def123456789);

/// Seeded roles as `(id, guid, name)`, inserted once at schema initialization
pub const SEED_ROLES: &[(u64, Uuid, &str)] = &[
    (ROLE_USER_ID, ROLE_USER_GUID, ROLE_USER),
    (ROLE_ADMIN_ID, ROLE_ADMIN_GUID, ROLE_ADMIN),
    (ROLE_MODERATOR_ID, ROLE_MODERATOR_GUID, ROLE_MODERATOR),
];

/// 2025-01-01T00:00:00Z, the creation time recorded on every seeded role
pub const SEED_TIMESTAMP_SECS: i64 = 1_735_689_600;

/// Audit timestamp of the seeded roles.
pub fn seed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_TIMESTAMP_SECS, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_timestamp_is_new_year_2025() {
        assert_eq!(seed_timestamp().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_seed_guids_match_canonical_form() {
        assert_eq!(
            ROLE_USER_GUID.to_string(),
            "a1b2c3d4-e5f6-7788-99a0-bcdef1234567"
        );
        assert_eq!(
            ROLE_MODERATOR_GUID.to_string(),
            "c3d4e5f6-a7b8-99a0-b1c2-def123456789"
        );
    }
}
