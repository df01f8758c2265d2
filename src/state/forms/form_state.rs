//! Form state: the record being edited plus the outcome of the last submit

use super::field::FieldId;
use super::record::FormRecord;
use super::validation;
use crate::api::{SubmitError, SUCCESS_MESSAGE};

/// Outcome indicator of the most recent submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Unset => None,
            SubmissionStatus::Success(m) | SubmissionStatus::Error(m) => Some(m),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error(_))
    }
}

/// Everything the prospect form owns.
///
/// The in-flight flag is advisory: `begin_submit` does not refuse to start a
/// second request while one is pending. Callers that drive a UI check
/// [`FormState::can_submit`] first.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub record: FormRecord,
    pub status: SubmissionStatus,
    submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new value for one field. Every edit goes through here.
    pub fn update(&mut self, field: FieldId, value: impl Into<String>) {
        self.record = self.record.with_field(field, value);
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.record.get(field)
    }

    /// Append a typed character to a field
    pub fn push_char(&mut self, field: FieldId, c: char) {
        let mut value = self.value(field).to_string();
        value.push(c);
        self.update(field, value);
    }

    /// Remove the last character of a field
    pub fn pop_char(&mut self, field: FieldId) {
        let mut value = self.value(field).to_string();
        if value.pop().is_some() {
            self.update(field, value);
        }
    }

    pub fn clear_field(&mut self, field: FieldId) {
        self.update(field, String::new());
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid(&self.record)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    /// Enter the submitting state.
    ///
    /// Returns the record to send, or `None` (leaving everything untouched)
    /// when required fields are missing.
    pub fn begin_submit(&mut self) -> Option<FormRecord> {
        if !self.is_valid() {
            return None;
        }
        self.submitting = true;
        self.status = SubmissionStatus::Unset;
        Some(self.record.clone())
    }

    /// Apply the result of a request started with [`FormState::begin_submit`]
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
                self.record = FormRecord::default();
            }
            Err(err) => {
                self.status = SubmissionStatus::Error(err.to_string());
            }
        }
        self.submitting = false;
    }
}
