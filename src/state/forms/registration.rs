//! Registration form data, derived age and validation rules

use super::field::{FieldError, FieldName, FieldValue};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Placeholder option shown until a batch is picked
pub const BATCH_SENTINEL: &str = "Select Your Batch";

/// Batch dropdown options, sentinel first
pub const BATCH_OPTIONS: [&str; 5] = [BATCH_SENTINEL, "6-7 AM", "7-8 AM", "8-9 AM", "5-6 PM"];

/// Inclusive age range accepted by the form
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 65;

/// Format expected for the birth date input
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// The registration payload, serialized as-is for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub birth_date: String,
    pub selected_batch: String,
    pub agree_terms: bool,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            birth_date: String::new(),
            selected_batch: BATCH_SENTINEL.to_string(),
            agree_terms: false,
        }
    }
}

impl FormData {
    /// Return a copy with one field replaced, leaving every other field as-is
    pub fn with_field(&self, field: FieldName, value: FieldValue) -> Result<Self, FieldError> {
        let mut next = self.clone();
        match (field, value) {
            (FieldName::AgreeTerms, FieldValue::Checked(checked)) => next.agree_terms = checked,
            (FieldName::FullName, FieldValue::Text(text)) => next.full_name = text,
            (FieldName::Email, FieldValue::Text(text)) => next.email = text,
            (FieldName::BirthDate, FieldValue::Text(text)) => next.birth_date = text,
            (FieldName::SelectedBatch, FieldValue::Text(text)) => next.selected_batch = text,
            (field, _) => return Err(FieldError::mismatch(field)),
        }
        Ok(next)
    }

    /// Text value of a field (empty for the checkbox)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::BirthDate => &self.birth_date,
            FieldName::SelectedBatch => &self.selected_batch,
            FieldName::AgreeTerms => "",
        }
    }
}

/// Calendar age in whole years on `today`
pub fn compute_age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age for a `YYYY-MM-DD` birth date as of the local calendar date.
///
/// Returns `None` when the string does not parse. Birth dates in the future
/// yield a negative age, which the range check rejects.
pub fn compute_age(birth_date: &str) -> Option<i32> {
    let birth = NaiveDate::parse_from_str(birth_date.trim(), BIRTH_DATE_FORMAT).ok()?;
    Some(compute_age_on(birth, Local::now().date_naive()))
}

/// A character outside the JavaScript `\s` class. This differs from the
/// Unicode `White_Space` set used by `\S`: NEL counts as text, BOM as space.
const NON_SPACE: &str = r"[^\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{NON_SPACE}+@{NON_SPACE}+\\.{NON_SPACE}+"))
        .expect("email pattern is valid")
});

/// Loose `\S+@\S+\.\S+` check, matching anywhere in the input
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Keys of the error map; `Age` is reported separately from `BirthDate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKey {
    FullName,
    Email,
    BirthDate,
    Age,
    SelectedBatch,
    AgreeTerms,
}

impl From<FieldName> for ErrorKey {
    fn from(field: FieldName) -> Self {
        match field {
            FieldName::FullName => ErrorKey::FullName,
            FieldName::Email => ErrorKey::Email,
            FieldName::BirthDate => ErrorKey::BirthDate,
            FieldName::SelectedBatch => ErrorKey::SelectedBatch,
            FieldName::AgreeTerms => ErrorKey::AgreeTerms,
        }
    }
}

/// Result of a validation pass; always replaced wholesale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<ErrorKey, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains_key(&key)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = ErrorKey> + '_ {
        self.0.keys().copied()
    }

    /// Message shown beneath a field. The birth date slot falls back to the
    /// age error.
    pub fn for_field(&self, field: FieldName) -> Option<&str> {
        let own = self.get(field.into());
        match field {
            FieldName::BirthDate => own.or_else(|| self.get(ErrorKey::Age)),
            _ => own,
        }
    }

    fn insert(&mut self, key: ErrorKey, message: &str) {
        self.0.insert(key, message.to_string());
    }
}

/// Check every field of `form`; `age` is the derived age for its birth date
pub fn validate(form: &FormData, age: Option<i32>) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.full_name.trim().is_empty() {
        errors.insert(ErrorKey::FullName, "Full Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(ErrorKey::Email, "Email is required");
    } else if !is_plausible_email(&form.email) {
        errors.insert(ErrorKey::Email, "Invalid email address");
    }

    if form.birth_date.is_empty() {
        errors.insert(ErrorKey::BirthDate, "Birth Date is required");
    } else {
        match age {
            None => errors.insert(
                ErrorKey::BirthDate,
                "Birth Date must be a valid date (YYYY-MM-DD)",
            ),
            Some(age) if !(MIN_AGE..=MAX_AGE).contains(&age) => errors.insert(
                ErrorKey::Age,
                "You must be between 18 and 65 years old to fill this form.",
            ),
            Some(_) => {}
        }
    }

    if form.selected_batch == BATCH_SENTINEL {
        errors.insert(ErrorKey::SelectedBatch, "Please select your batch");
    }

    if !form.agree_terms {
        errors.insert(ErrorKey::AgreeTerms, "You must agree to the terms");
    }

    errors
}

/// Outcome of the last submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    Success,
    Error,
}
