//! Application state definitions

use super::forms::{
    compute_age, validate, FieldError, FieldName, FieldValue, FormData, FormErrors,
    SubmissionStatus, BATCH_OPTIONS,
};

/// Focusable controls on the registration screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Field(FieldName),
    SubmitButton,
}

impl Control {
    /// Number of focusable controls (five fields plus the button)
    pub const COUNT: usize = 6;

    pub fn from_index(index: usize) -> Self {
        match FieldName::ALL.get(index) {
            Some(field) => Control::Field(*field),
            None => Control::SubmitButton,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Form data
    pub form: FormData,
    pub user_age: Option<i32>,
    pub form_errors: FormErrors,
    pub submission_status: SubmissionStatus,

    // Focus
    pub active_form_field: usize,

    // Submissions spawned but not yet reported back
    pub pending_submissions: usize,
}

impl AppState {
    /// Apply a field change. A birth date change also refreshes the derived age.
    pub fn apply_field_change(
        &mut self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(), FieldError> {
        self.form = self.form.with_field(field, value)?;
        if field == FieldName::BirthDate && !self.form.birth_date.is_empty() {
            self.user_age = compute_age(&self.form.birth_date);
        }
        Ok(())
    }

    /// Run validation, replacing the stored errors. Returns true when clean.
    pub fn validate_form(&mut self) -> bool {
        self.form_errors = validate(&self.form, self.user_age);
        self.form_errors.is_empty()
    }

    /// The submit button is only enabled once the terms are agreed
    pub fn can_submit(&self) -> bool {
        self.form.agree_terms
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submissions > 0
    }

    /// Currently focused control
    pub fn active_control(&self) -> Control {
        Control::from_index(self.active_form_field)
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % Control::COUNT;
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = Control::COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Handle character input on the focused text field
    pub fn form_input_char(&mut self, c: char) -> Result<(), FieldError> {
        if let Some(field) = self.active_text_field() {
            let mut value = self.form.text(field).to_string();
            value.push(c);
            self.apply_field_change(field, FieldValue::Text(value))?;
        }
        Ok(())
    }

    /// Handle backspace on the focused text field
    pub fn form_backspace(&mut self) -> Result<(), FieldError> {
        if let Some(field) = self.active_text_field() {
            let mut value = self.form.text(field).to_string();
            if value.pop().is_some() {
                self.apply_field_change(field, FieldValue::Text(value))?;
            }
        }
        Ok(())
    }

    /// Step the batch dropdown forward or backward, wrapping around
    pub fn cycle_batch(&mut self, forward: bool) -> Result<(), FieldError> {
        let count = BATCH_OPTIONS.len();
        let current = BATCH_OPTIONS
            .iter()
            .position(|option| *option == self.form.selected_batch)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.apply_field_change(
            FieldName::SelectedBatch,
            FieldValue::text(BATCH_OPTIONS[next]),
        )
    }

    /// Flip the terms checkbox
    pub fn toggle_terms(&mut self) -> Result<(), FieldError> {
        let checked = !self.form.agree_terms;
        self.apply_field_change(FieldName::AgreeTerms, FieldValue::Checked(checked))
    }

    fn active_text_field(&self) -> Option<FieldName> {
        match self.active_control() {
            Control::Field(
                field @ (FieldName::FullName | FieldName::Email | FieldName::BirthDate),
            ) => Some(field),
            _ => None,
        }
    }
}
