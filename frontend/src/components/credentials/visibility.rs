use common::model::integration::IntegrationType;

use super::{CredentialField, CredentialForm, FieldState};

/// Shows and requires the credential fields for `autoparts`, hides and
/// releases them for anything else.
///
/// Only writes absolute state, so applying the same value twice leaves the
/// form unchanged.
pub fn apply_visibility(form: &dyn CredentialForm, discriminator: &str) {
    let kind = IntegrationType::parse(discriminator);
    let required = kind.requires_credentials();
    let state = FieldState::for_requirement(required);

    for field in CredentialField::ALL {
        form.set_field_state(field, state);
    }
    form.set_panel_visible(required);

    log::debug!(
        "credential fields required: {required} (type `{}`)",
        kind.as_str()
    );
}
