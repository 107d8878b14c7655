use thiserror::Error;

use crate::form::model::{FormInput, StyleArchetype};

pub const OCCASION_MIN_LENGTH: usize = 5;
pub const OCCASION_MAX_LENGTH: usize = 300;
pub const PREFERENCES_MAX_LENGTH: usize = 200;

/// Inline, per-field validation failure. Never raised past the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please describe the occasion.")]
    Empty,
    #[error("At least {min} chars needed.")]
    TooShort { min: usize },
    #[error("Limit to {max} characters.")]
    TooLong { max: usize },
    #[error("Required.")]
    Required,
}

pub fn validate_occasion(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if trimmed.is_empty() {
        return Some(FieldError::Empty);
    }
    if len < OCCASION_MIN_LENGTH {
        return Some(FieldError::TooShort { min: OCCASION_MIN_LENGTH });
    }
    if len > OCCASION_MAX_LENGTH {
        return Some(FieldError::TooLong { max: OCCASION_MAX_LENGTH });
    }
    None
}

pub fn validate_archetype(value: Option<StyleArchetype>) -> Option<FieldError> {
    match value {
        Some(_) => None,
        None => Some(FieldError::Required),
    }
}

// Untrimmed on purpose: trailing spaces count against the limit.
pub fn validate_preferences(value: &str) -> Option<FieldError> {
    if value.chars().count() > PREFERENCES_MAX_LENGTH {
        return Some(FieldError::TooLong { max: PREFERENCES_MAX_LENGTH });
    }
    None
}

/// Result of running every field validator over a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub occasion: Option<FieldError>,
    pub style: Option<FieldError>,
    pub preferences: Option<FieldError>,
}

impl FormErrors {
    pub fn check(form: &FormInput) -> Self {
        Self {
            occasion: validate_occasion(&form.occasion),
            style: validate_archetype(form.style),
            preferences: validate_preferences(&form.preferences),
        }
    }

    /// Submission is permitted only when this holds.
    pub fn is_clear(&self) -> bool {
        self.occasion.is_none() && self.style.is_none() && self.preferences.is_none()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(err) = self.occasion {
            parts.push(format!("occasion: {err}"));
        }
        if let Some(err) = self.style {
            parts.push(format!("style: {err}"));
        }
        if let Some(err) = self.preferences {
            parts.push(format!("preferences: {err}"));
        }
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occasion_blank_is_empty() {
        assert_eq!(validate_occasion(""), Some(FieldError::Empty));
        assert_eq!(validate_occasion("   \n\t"), Some(FieldError::Empty));
    }

    #[test]
    fn occasion_length_is_measured_after_trim() {
        assert_eq!(validate_occasion("  abcd  "), Some(FieldError::TooShort { min: 5 }));
        assert_eq!(validate_occasion("  abcde  "), None);

        let max = "x".repeat(OCCASION_MAX_LENGTH);
        assert_eq!(validate_occasion(&format!("  {max}  ")), None);
        assert_eq!(
            validate_occasion(&format!("{max}y")),
            Some(FieldError::TooLong { max: 300 })
        );
    }

    #[test]
    fn occasion_counts_characters_not_bytes() {
        // five two-byte characters
        assert_eq!(validate_occasion("ééééé"), None);
        assert_eq!(validate_occasion(&"é".repeat(300)), None);
    }

    #[test]
    fn archetype_is_required() {
        assert_eq!(validate_archetype(None), Some(FieldError::Required));
        assert_eq!(validate_archetype(Some(StyleArchetype::NonBinary)), None);
    }

    #[test]
    fn preferences_are_optional_and_not_trimmed() {
        assert_eq!(validate_preferences(""), None);
        assert_eq!(validate_preferences(&"a".repeat(200)), None);
        assert_eq!(
            validate_preferences(&format!("{} ", "a".repeat(200))),
            Some(FieldError::TooLong { max: 200 })
        );
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(FieldError::Empty.to_string(), "Please describe the occasion.");
        assert_eq!(FieldError::TooShort { min: 5 }.to_string(), "At least 5 chars needed.");
        assert_eq!(FieldError::TooLong { max: 300 }.to_string(), "Limit to 300 characters.");
        assert_eq!(FieldError::Required.to_string(), "Required.");
    }

    #[test]
    fn form_errors_gate_submission() {
        let empty = FormErrors::check(&FormInput::default());
        assert!(!empty.is_clear());
        assert_eq!(empty.occasion, Some(FieldError::Empty));
        assert_eq!(empty.style, Some(FieldError::Required));
        assert_eq!(empty.preferences, None);
        assert_eq!(
            empty.summary(),
            "occasion: Please describe the occasion.; style: Required."
        );

        let ok = FormErrors::check(&FormInput::new("Beach wedding", Some(StyleArchetype::Female), ""));
        assert!(ok.is_clear());
        assert_eq!(ok.summary(), "");
    }

    #[test]
    fn validation_is_idempotent() {
        let form = FormInput::new("abc", None, "x".repeat(201));
        assert_eq!(FormErrors::check(&form), FormErrors::check(&form));
    }
}
