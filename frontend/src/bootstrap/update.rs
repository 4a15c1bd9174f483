use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::components::credentials::visibility::apply_visibility;

use super::messages::Msg;
use super::state::SupplierAdmin;

/// Routes one page event to the component that owns it.
///
/// Actions are spawned on the event loop; their outcome has already been
/// shown to the user, so it is only logged here.
pub fn update(app: &SupplierAdmin, msg: Msg) {
    match msg {
        Msg::DiscriminatorChanged(value) => apply_visibility(app.form.as_ref(), &value),
        Msg::Submit(event) => {
            if !app.validator.validate() {
                event.prevent_default();
            }
        }
        Msg::TestConnection(trigger) => {
            let dispatcher = Rc::clone(&app.dispatcher);
            spawn_local(async move {
                if let Err(err) = dispatcher.run_test_connection(&trigger).await {
                    log::debug!("test connection ended: {err}");
                }
            });
        }
        Msg::Sync { action, trigger } => {
            let dispatcher = Rc::clone(&app.dispatcher);
            spawn_local(async move {
                if let Err(err) = dispatcher.run_sync_action(&action, &trigger).await {
                    log::debug!("`{action}` ended: {err}");
                }
            });
        }
    }
}
