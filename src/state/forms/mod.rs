//! Form domain layer
//!
//! Field identifiers, the registration record and its validation rules.

mod field;
mod registration;

pub use field::{FieldError, FieldName, FieldValue};
pub use registration::{
    compute_age, validate, FormData, FormErrors, SubmissionStatus, BATCH_OPTIONS,
};

#[cfg(test)]
pub use registration::{ErrorKey, BATCH_SENTINEL, BIRTH_DATE_FORMAT};
