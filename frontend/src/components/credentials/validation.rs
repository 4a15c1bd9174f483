//! Pre-submit validation of the credential fields.
//!
//! Credentials are only checked when the integration type is `autoparts`.
//! The secret is write-only on the server side, so an existing record may
//! leave it blank to keep the stored one; only new records must provide it.

use std::rc::Rc;

use common::model::integration::IntegrationType;

use super::{CredentialField, CredentialForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: CredentialField,
    pub message: String,
}

impl ValidationError {
    fn required(field: CredentialField) -> Self {
        let message = match field {
            CredentialField::Url => "API URL is required for the \"autoparts\" type",
            CredentialField::Login => "API login is required for the \"autoparts\" type",
            CredentialField::Secret => "API password is required for a new supplier",
        };
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Returns one error per blank required field, in url, login, secret order.
///
/// `value` yields `None` for a missing control, which counts as blank.
pub fn check_credentials(
    value: impl Fn(CredentialField) -> Option<String>,
    is_existing_record: bool,
) -> Vec<ValidationError> {
    CredentialField::ALL
        .into_iter()
        .filter(|field| *field != CredentialField::Secret || !is_existing_record)
        .filter(|field| value(*field).is_none_or(|v| v.trim().is_empty()))
        .map(ValidationError::required)
        .collect()
}

pub struct FormValidator {
    form: Rc<dyn CredentialForm>,
    is_existing_record: bool,
}

impl FormValidator {
    pub fn new(form: Rc<dyn CredentialForm>, is_existing_record: bool) -> Self {
        Self {
            form,
            is_existing_record,
        }
    }

    /// Clears previous annotations, then annotates every failing field.
    /// Returns `false` when the submission must be cancelled.
    pub fn validate(&self) -> bool {
        self.form.clear_annotations();

        let requires_credentials = self
            .form
            .discriminator()
            .map(|raw| IntegrationType::parse(&raw).requires_credentials())
            .unwrap_or(false);
        if !requires_credentials {
            return true;
        }

        let errors = check_credentials(|field| self.form.value(field), self.is_existing_record);
        for error in &errors {
            self.form.annotate(error.field, &error.message);
        }
        if !errors.is_empty() {
            log::info!("supplier form blocked: {} invalid field(s)", errors.len());
        }
        errors.is_empty()
    }
}
