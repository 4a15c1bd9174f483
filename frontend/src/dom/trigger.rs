//! `ActionTrigger` over a page element.
//!
//! Action triggers are usually `<button>`s, but the admin templates also use
//! links styled as buttons. Links have no `disabled` property, so for them the
//! state is kept in the `disabled` and `aria-disabled` attributes.

use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement};

use crate::components::actions::trigger::ActionTrigger;

/// A button, or any other element acting as one.
pub struct DomTrigger {
    element: HtmlElement,
}

impl DomTrigger {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ActionTrigger for DomTrigger {
    fn content(&self) -> String {
        self.element.inner_html()
    }

    fn set_content(&self, content: &str) {
        self.element.set_inner_html(content);
    }

    fn is_disabled(&self) -> bool {
        match self.element.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => self.element.has_attribute("disabled"),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            self.element.set_attribute("disabled", "disabled").ok();
            self.element.set_attribute("aria-disabled", "true").ok();
        } else {
            self.element.remove_attribute("disabled").ok();
            self.element.remove_attribute("aria-disabled").ok();
        }
    }
}
