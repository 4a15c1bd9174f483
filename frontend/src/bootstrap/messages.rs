//! Events the supplier admin page reacts to.

use std::rc::Rc;

use crate::components::actions::trigger::TriggerHandle;

/// Page events handled by `update`.
pub enum Msg {
    /// Integration type selector changed; carries the new raw value.
    DiscriminatorChanged(String),
    /// The supplier form is being submitted; cancelled if validation fails.
    Submit(web_sys::Event),
    /// The connection test trigger was clicked.
    TestConnection(Rc<TriggerHandle>),
    /// A `data-sync-action` trigger was clicked; `action` is the attribute's
    /// value.
    Sync {
        action: String,
        trigger: Rc<TriggerHandle>,
    },
}
