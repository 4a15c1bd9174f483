//! `CredentialForm` over the supplier admin form.
//!
//! Each credential control is wrapped in an admin row (`.form-row` or
//! `.field-box`). Visibility and the `required` marker are applied to that
//! row, validation messages are appended to it as `div.validation-error`, and
//! the optional `.api-fields-group` fieldset is toggled as a whole.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::credentials::{CredentialField, CredentialForm, FieldState};

use super::{control_value, DISCRIMINATOR_ID};

/// Admin rows wrap each control in one of these.
const FIELD_CONTAINER: &str = ".form-row, .field-box";
const API_PANEL: &str = ".api-fields-group";
const ERROR_CLASS: &str = "validation-error";
const ERROR_COLOR: &str = "#dc3545";

/// Reads and decorates the credential controls of `document`.
///
/// Holds no element references; every call looks the controls up again, so
/// rows re-rendered by other page scripts are still found.
pub struct DomCredentialForm {
    document: Document,
}

impl DomCredentialForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn control(&self, field: CredentialField) -> Option<Element> {
        self.document.get_element_by_id(field.control_id())
    }
}

/// Admin row around `control`, if the control sits in one.
fn container(control: &Element) -> Option<HtmlElement> {
    control
        .closest(FIELD_CONTAINER)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

impl CredentialForm for DomCredentialForm {
    fn discriminator(&self) -> Option<String> {
        self.document
            .get_element_by_id(DISCRIMINATOR_ID)
            .and_then(|element| control_value(&element))
    }

    fn value(&self, field: CredentialField) -> Option<String> {
        self.control(field).and_then(|element| control_value(&element))
    }

    fn set_field_state(&self, field: CredentialField, state: FieldState) {
        let Some(control) = self.control(field) else {
            return;
        };
        let Some(container) = container(&control) else {
            return;
        };

        container
            .style()
            .set_property("display", display(state.visible))
            .ok();
        if state.required {
            control.set_attribute("required", "required").ok();
            container.class_list().add_1("required").ok();
        } else {
            control.remove_attribute("required").ok();
            container.class_list().remove_1("required").ok();
        }
    }

    fn set_panel_visible(&self, visible: bool) {
        if let Some(panel) = self
            .document
            .query_selector(API_PANEL)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            panel.style().set_property("display", display(visible)).ok();
        }
    }

    fn clear_annotations(&self) {
        if let Ok(errors) = self.document.query_selector_all(&format!(".{ERROR_CLASS}")) {
            for index in 0..errors.length() {
                if let Some(error) = errors
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                {
                    error.remove();
                }
            }
        }

        if let Ok(controls) = self.document.query_selector_all("input, select, textarea") {
            for index in 0..controls.length() {
                if let Some(control) = controls
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                {
                    control.style().remove_property("border-color").ok();
                }
            }
        }
    }

    fn annotate(&self, field: CredentialField, message: &str) {
        let Some(control) = self.control(field) else {
            log::warn!("cannot annotate missing control #{}", field.control_id());
            return;
        };
        let Some(container) = container(&control) else {
            return;
        };
        let Ok(error) = self.document.create_element("div") else {
            return;
        };

        error.set_class_name(ERROR_CLASS);
        error.set_text_content(Some(message));
        let error: HtmlElement = error.unchecked_into();
        let style = error.style();
        style.set_property("color", ERROR_COLOR).ok();
        style.set_property("font-size", "12px").ok();
        style.set_property("margin-top", "5px").ok();

        if container.append_child(&error).is_ok() {
            if let Some(control) = control.dyn_ref::<HtmlElement>() {
                control.style().set_property("border-color", ERROR_COLOR).ok();
            }
        }
    }
}
