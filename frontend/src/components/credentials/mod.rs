//! Credential fields of the supplier form: which ones are shown, which are
//! required, and whether the values are acceptable before submission.
//!
//! The form itself is reached only through `CredentialForm`, so the rules in
//! `visibility` and `validation` run the same against the page and against
//! the in-memory form used by the tests.

pub mod validation;
pub mod visibility;

#[cfg(test)]
pub(crate) mod testing;

/// Connection credentials of an `autoparts` supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Url,
    Login,
    Secret,
}

impl CredentialField {
    pub const ALL: [CredentialField; 3] = [
        CredentialField::Url,
        CredentialField::Login,
        CredentialField::Secret,
    ];

    /// `id` of the control rendered by the admin form.
    pub fn control_id(self) -> &'static str {
        match self {
            CredentialField::Url => "id_api_url",
            CredentialField::Login => "id_api_login",
            CredentialField::Secret => "id_api_password",
        }
    }
}

/// Display and constraint state of one credential field. The two flags are
/// always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
}

impl FieldState {
    pub fn for_requirement(required: bool) -> Self {
        Self {
            visible: required,
            required,
        }
    }
}

/// The host form as seen by the visibility and validation rules.
///
/// Every method tolerates missing controls: getters return `None` and
/// setters do nothing.
pub trait CredentialForm {
    /// Raw value of the integration type selector.
    fn discriminator(&self) -> Option<String>;

    fn value(&self, field: CredentialField) -> Option<String>;

    fn set_field_state(&self, field: CredentialField, state: FieldState);

    /// Shows or hides the panel grouping the API settings.
    fn set_panel_visible(&self, visible: bool);

    /// Removes every validation annotation and error styling.
    fn clear_annotations(&self);

    fn annotate(&self, field: CredentialField, message: &str);
}
