//! Shared state of the page's event handlers.
//!
//! `SupplierAdmin` is built once by `bootstrap::init` and shared through an
//! `Rc` by every listener closure, which passes it to `update` together with
//! the `Msg` for the event.

use std::rc::Rc;

use crate::components::actions::ActionDispatcher;
use crate::components::credentials::validation::FormValidator;
use crate::components::credentials::CredentialForm;

/// Everything the page's event handlers share.
///
/// Fields are `pub` because `update` reads them directly.
pub struct SupplierAdmin {
    /// The supplier form; credential fields are shown or hidden on it.
    pub form: Rc<dyn CredentialForm>,

    /// Checks the credential fields before the form is submitted.
    pub validator: FormValidator,

    /// Runs the connection test and the sync actions. Behind an `Rc` so a
    /// spawned action can outlive the event that started it.
    pub dispatcher: Rc<ActionDispatcher>,
}
