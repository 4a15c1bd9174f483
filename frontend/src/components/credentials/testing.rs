use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{CredentialField, CredentialForm, FieldState};

/// In-memory form. A field without a value behaves like a missing control.
pub struct FakeForm {
    pub discriminator: RefCell<Option<String>>,
    pub values: RefCell<HashMap<CredentialField, String>>,
    pub states: RefCell<HashMap<CredentialField, FieldState>>,
    pub panel_visible: Cell<Option<bool>>,
    pub annotations: RefCell<Vec<(CredentialField, String)>>,
}

impl FakeForm {
    pub fn new(discriminator: &str) -> Self {
        Self {
            discriminator: RefCell::new(Some(discriminator.to_string())),
            values: RefCell::new(HashMap::new()),
            states: RefCell::new(HashMap::new()),
            panel_visible: Cell::new(None),
            annotations: RefCell::new(Vec::new()),
        }
    }

    pub fn with_values(self, url: &str, login: &str, secret: &str) -> Self {
        {
            let mut values = self.values.borrow_mut();
            values.insert(CredentialField::Url, url.to_string());
            values.insert(CredentialField::Login, login.to_string());
            values.insert(CredentialField::Secret, secret.to_string());
        }
        self
    }

    pub fn state(&self, field: CredentialField) -> Option<FieldState> {
        self.states.borrow().get(&field).copied()
    }

    pub fn snapshot(&self) -> (Vec<Option<FieldState>>, Option<bool>) {
        (
            CredentialField::ALL.iter().map(|f| self.state(*f)).collect(),
            self.panel_visible.get(),
        )
    }

    pub fn annotated_fields(&self) -> Vec<CredentialField> {
        self.annotations.borrow().iter().map(|(f, _)| *f).collect()
    }
}

impl CredentialForm for FakeForm {
    fn discriminator(&self) -> Option<String> {
        self.discriminator.borrow().clone()
    }

    fn value(&self, field: CredentialField) -> Option<String> {
        self.values.borrow().get(&field).cloned()
    }

    fn set_field_state(&self, field: CredentialField, state: FieldState) {
        self.states.borrow_mut().insert(field, state);
    }

    fn set_panel_visible(&self, visible: bool) {
        self.panel_visible.set(Some(visible));
    }

    fn clear_annotations(&self) {
        self.annotations.borrow_mut().clear();
    }

    fn annotate(&self, field: CredentialField, message: &str) {
        self.annotations
            .borrow_mut()
            .push((field, message.to_string()));
    }
}
