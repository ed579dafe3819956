//! Field-level validation of inbound data.

use validator::Validate;

use crate::error::{DomainError, DomainResult};

/// Validate an input object, reporting the first failing field.
///
/// Fields are visited in name order so the reported message is stable.
pub fn validate_input<T: Validate>(input: &T) -> DomainResult<()> {
    input.validate().map_err(|errors| {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .find_map(|(field, errors)| {
                errors.first().map(|error| match &error.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for '{}'", field),
                })
            })
            .unwrap_or_else(|| "Validation failed".to_string());

        DomainError::validation(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewRole, NewUserProfile};

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&NewRole::new("Editor")).is_ok());
    }

    #[test]
    fn test_reports_field_message() {
        let err = validate_input(&NewUserProfile::new("Alice", "bad", 1)).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Please enter a valid email address.")
        );
    }

    #[test]
    fn test_first_field_in_name_order() {
        // Both email and name are invalid; "email" sorts first.
        let err = validate_input(&NewUserProfile::new("", "bad", 1)).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Please enter a valid email address.")
        );
    }
}
