//! Form field value objects

use thiserror::Error;

/// Identifies one of the registration form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Email,
    BirthDate,
    SelectedBatch,
    AgreeTerms,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 5] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::BirthDate,
        FieldName::SelectedBatch,
        FieldName::AgreeTerms,
    ];

    /// Key used on the wire and in error maps
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::BirthDate => "birthDate",
            Self::SelectedBatch => "selectedBatch",
            Self::AgreeTerms => "agreeTerms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::BirthDate => "Birth Date",
            Self::SelectedBatch => "Select Your Batch",
            Self::AgreeTerms => "Check me out",
        }
    }

    /// Checkbox fields take a boolean, everything else takes raw text
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::AgreeTerms)
    }
}

/// New value for a field, decoupled from any terminal event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// Errors raised when a field update cannot be applied
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field `{field}` expects a {expected} value")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

impl FieldError {
    pub(crate) fn mismatch(field: FieldName) -> Self {
        FieldError::KindMismatch {
            field: field.wire_name(),
            expected: if field.is_checkbox() { "boolean" } else { "text" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_payload_keys() {
        let names: Vec<_> = FieldName::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(
            names,
            vec!["fullName", "email", "birthDate", "selectedBatch", "agreeTerms"]
        );
    }

    #[test]
    fn test_only_agree_terms_is_checkbox() {
        for field in FieldName::ALL {
            assert_eq!(field.is_checkbox(), field == FieldName::AgreeTerms);
        }
    }

    #[test]
    fn test_mismatch_message() {
        let err = FieldError::mismatch(FieldName::AgreeTerms);
        assert_eq!(err.to_string(), "field `agreeTerms` expects a boolean value");

        let err = FieldError::mismatch(FieldName::Email);
        assert_eq!(err.to_string(), "field `email` expects a text value");
    }
}
