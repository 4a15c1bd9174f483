//! The admin page itself: location, hidden controls, confirmation dialog and
//! embedded configuration.
//!
//! `DomPage` implements both `PageContext` and `ConfirmPrompt`, so the
//! dispatcher gets the same object twice.

use web_sys::{Document, Window};

use crate::components::actions::record::PageContext;
use crate::components::actions::ConfirmPrompt;
use crate::config::AdminConfig;

use super::{control_value, CONFIG_ELEMENT_ID};

/// Marker the admin renders on change forms ("Save and continue editing").
const CONTINUE_MARKER: &str = r#"input[name="_continue"]"#;
const HIDDEN_ID: &str = r#"input[name="id"]"#;
const CSRF_TOKEN: &str = "[name=csrfmiddlewaretoken]";

/// Window and document of the running page.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Whether the page shows the "save and continue editing" control.
    ///
    /// The admin renders it on change forms only, so its presence tells an
    /// existing record from a new one.
    ///
    /// # Returns
    /// `true` when an `input[name="_continue"]` is found.
    pub fn has_continue_marker(&self) -> bool {
        matches!(self.document.query_selector(CONTINUE_MARKER), Ok(Some(_)))
    }

    /// Reads the configuration embedded in the page.
    ///
    /// The JSON is taken from the text of the `#supplier-admin-config`
    /// element. Fields it leaves out keep their defaults.
    ///
    /// # Returns
    /// The parsed `AdminConfig`, or `AdminConfig::default()` when the element
    /// is missing. Invalid JSON or an unknown log level is logged as a warning
    /// and also yields the defaults.
    pub fn load_config(&self) -> AdminConfig {
        let Some(raw) = self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return AdminConfig::default();
        };

        match AdminConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                AdminConfig::default()
            }
        }
    }

    fn selector_value(&self, selector: &str) -> Option<String> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| control_value(&element))
    }
}

impl PageContext for DomPage {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn hidden_record_id(&self) -> Option<String> {
        self.selector_value(HIDDEN_ID)
    }

    fn csrf_token(&self) -> String {
        self.selector_value(CSRF_TOKEN).unwrap_or_default()
    }
}

impl ConfirmPrompt for DomPage {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}
