//! Browser implementations of the component traits.
//!
//! Everything here assumes the markup produced by the supplier admin page:
//! controls are found by their well-known ids, names and classes below.

pub mod form;
pub mod notifications;
pub mod page;
pub mod trigger;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Element;

pub const DISCRIMINATOR_ID: &str = "id_api_type";
pub const TEST_TRIGGER_SELECTOR: &str = ".test-api-btn";
pub const SYNC_ACTION_ATTRIBUTE: &str = "data-sync-action";
pub const SYNC_TRIGGER_SELECTOR: &str = "[data-sync-action]";
pub const CONFIG_ELEMENT_ID: &str = "supplier-admin-config";

/// `value` property of an input, select or textarea.
pub fn control_value(element: &Element) -> Option<String> {
    Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
}
