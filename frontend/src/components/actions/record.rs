//! Locating the supplier record the admin page is editing.
//!
//! Actions are only meaningful for a saved record, so both the connection
//! test and the sync actions start by resolving its id. The page is reached
//! through `PageContext`, which lets the dispatcher run against a fake page
//! in tests.

use std::fmt;

/// Identifier of a saved supplier record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the dispatcher needs to know about the page it runs on.
pub trait PageContext {
    /// Path of the current location, e.g. `/admin/catalog/supplier/42/change/`.
    fn pathname(&self) -> String;

    /// Value of the hidden `id` control, if the form has one.
    fn hidden_record_id(&self) -> Option<String>;

    /// Anti-forgery token, empty when the page has none.
    fn csrf_token(&self) -> String;
}

/// Finds the id of the record being edited.
///
/// The admin change URL has the form `.../<id>/change/`, so the segment right
/// before the first `change` segment is tried first. Add pages have no such
/// segment; there the hidden `id` control is used instead.
///
/// # Arguments
/// * `pathname` - Path of the current location.
/// * `hidden_id` - Raw value of the hidden `id` control, if present.
///
/// # Returns
/// `Some(RecordId)` for the first non-blank candidate, `None` when the record
/// has not been saved yet.
pub fn resolve_record_id(pathname: &str, hidden_id: Option<&str>) -> Option<RecordId> {
    let segments: Vec<&str> = pathname.split('/').collect();
    let from_path = segments
        .iter()
        .position(|segment| *segment == "change")
        .filter(|index| *index > 0)
        .map(|index| segments[index - 1])
        .filter(|id| !id.is_empty());

    from_path
        .or_else(|| hidden_id.map(str::trim).filter(|id| !id.is_empty()))
        .map(|id| RecordId(id.to_string()))
}
