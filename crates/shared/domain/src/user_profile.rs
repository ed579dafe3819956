//! User profile domain entity and related types.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::record::{Record, RecordId};
use crate::role::Role;

/// User profile domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: RecordId,
    pub guid: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub role_id: RecordId,
    /// Associated role, populated only by eager reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub receive_newsletter: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl UserProfile {
    /// Attach the eagerly loaded role
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }
}

impl Record for UserProfile {
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

/// User profile creation data transfer object.
///
/// `id` is normally left empty so the store assigns one; a client-supplied
/// id is checked for reuse together with the guid.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[validate(custom(function = "validate_guid"))]
    pub guid: Uuid,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and cannot be longer than 100 characters."
    ))]
    pub name: String,
    #[validate(
        email(message = "Please enter a valid email address."),
        length(max = 255, message = "Email cannot be longer than 255 characters.")
    )]
    pub email: String,
    #[validate(length(max = 500, message = "Bio cannot be longer than 500 characters."))]
    pub bio: Option<String>,
    #[validate(range(min = 1, message = "RoleId must be a positive number."))]
    pub role_id: RecordId,
    #[serde(default)]
    pub receive_newsletter: bool,
}

impl NewUserProfile {
    /// Create a profile request with a freshly generated guid
    pub fn new(name: impl Into<String>, email: impl Into<String>, role_id: RecordId) -> Self {
        Self {
            id: None,
            guid: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            bio: None,
            role_id,
            receive_newsletter: false,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_newsletter(mut self, receive_newsletter: bool) -> Self {
        self.receive_newsletter = receive_newsletter;
        self
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_guid(mut self, guid: Uuid) -> Self {
        self.guid = guid;
        self
    }
}

/// User profile update data transfer object.
///
/// Every mutable field is replaced; id, guid and audit timestamps are not.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub id: RecordId,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and cannot be longer than 100 characters."
    ))]
    pub name: String,
    #[validate(
        email(message = "Please enter a valid email address."),
        length(max = 255, message = "Email cannot be longer than 255 characters.")
    )]
    pub email: String,
    #[validate(length(max = 500, message = "Bio cannot be longer than 500 characters."))]
    pub bio: Option<String>,
    #[validate(range(min = 1, message = "RoleId must be a positive number."))]
    pub role_id: RecordId,
    #[serde(default)]
    pub receive_newsletter: bool,
}

impl From<&UserProfile> for UserProfileUpdate {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            email: profile.email.clone(),
            bio: profile.bio.clone(),
            role_id: profile.role_id,
            receive_newsletter: profile.receive_newsletter,
        }
    }
}

fn validate_guid(guid: &Uuid) -> Result<(), ValidationError> {
    if guid.is_nil() {
        let mut error = ValidationError::new("guid");
        error.message = Some(Cow::Borrowed("Guid must be a valid GUID."));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = NewUserProfile::new("Alice", "alice@x.com", 2)
            .with_bio("Hello")
            .with_newsletter(true);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let profile = NewUserProfile::new("Alice", "not-an-email", 2);
        let errors = profile.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_name() {
        let profile = NewUserProfile::new("", "alice@x.com", 2);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_bio_too_long() {
        let profile = NewUserProfile::new("Alice", "alice@x.com", 2).with_bio("b".repeat(501));
        assert!(profile.validate().is_err());

        let profile = NewUserProfile::new("Alice", "alice@x.com", 2).with_bio("b".repeat(500));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_role_id_must_be_positive() {
        let profile = NewUserProfile::new("Alice", "alice@x.com", 0);
        let errors = profile.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role_id"));
    }

    #[test]
    fn test_nil_guid_rejected() {
        let profile = NewUserProfile::new("Alice", "alice@x.com", 2).with_guid(Uuid::nil());
        let errors = profile.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("guid"));
    }

    #[test]
    fn test_update_from_profile_copies_mutable_fields() {
        let now = Utc::now();
        let profile = UserProfile {
            id: 7,
            guid: Uuid::new_v4(),
            name: "Bob".to_string(),
            email: "bob@x.com".to_string(),
            bio: Some("bio".to_string()),
            role_id: 1,
            role: None,
            receive_newsletter: true,
            created_on: now,
            updated_on: now,
        };

        let update = UserProfileUpdate::from(&profile);
        assert_eq!(update.id, 7);
        assert_eq!(update.email, "bob@x.com");
        assert!(update.receive_newsletter);
        assert!(update.validate().is_ok());
    }
}
