use crate::registration::RegistrationDraft;
use crate::validation::{paths, sanitize, FieldErrors};

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    pub fn path(&self) -> &'static str {
        match self {
            RegistrationField::Name => paths::NAME,
            RegistrationField::Email => paths::EMAIL,
            RegistrationField::Password => paths::PASSWORD,
            RegistrationField::ConfirmPassword => paths::CONFIRM_PASSWORD,
        }
    }
}

/// Mutable state of the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraftController {
    draft: RegistrationDraft,
    errors: FieldErrors,
}

impl RegistrationDraftController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Stores `value` in `field`. Name and email are sanitized; passwords
    /// are stored exactly as typed.
    pub fn update(&mut self, field: RegistrationField, value: &str) {
        match field {
            RegistrationField::Name => self.draft.name = sanitize(value),
            RegistrationField::Email => self.draft.email = sanitize(value),
            RegistrationField::Password => self.draft.password = value.to_string(),
            RegistrationField::ConfirmPassword => self.draft.confirm_password = value.to_string(),
        }
        self.errors.remove(field.path());
    }

    pub fn update_name(&mut self, value: &str) {
        self.update(RegistrationField::Name, value);
    }

    pub fn update_email(&mut self, value: &str) {
        self.update(RegistrationField::Email, value);
    }

    pub fn update_password(&mut self, value: &str) {
        self.update(RegistrationField::Password, value);
    }

    pub fn update_confirm_password(&mut self, value: &str) {
        self.update(RegistrationField::ConfirmPassword, value);
    }

    pub fn record_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
