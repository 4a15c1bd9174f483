//! Busy state of the elements that start remote actions.
//!
//! A trigger shows a spinner and is disabled while its request is pending.
//! `BusyGuard` undoes both when it goes out of scope, so the element is
//! restored however the action ends.

use std::cell::Cell;
use std::rc::Rc;

/// An element that starts an action: a button or a link.
pub trait ActionTrigger {
    /// Current markup of the element.
    fn content(&self) -> String;

    /// Replaces the element's markup, e.g. with a spinner label.
    fn set_content(&self, content: &str);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);
}

/// A trigger together with its in-flight flag.
///
/// Disabling the element is only a visual hint; the flag is what keeps a
/// trigger from starting a second request while the first one is pending.
pub struct TriggerHandle {
    element: Rc<dyn ActionTrigger>,
    in_flight: Cell<bool>,
}

impl TriggerHandle {
    pub fn new(element: Rc<dyn ActionTrigger>) -> Self {
        Self {
            element,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Marks the trigger busy.
    ///
    /// # Arguments
    /// * `busy_content` - Markup shown while the request is pending.
    ///
    /// # Returns
    /// A guard that restores the trigger when dropped, or `None` if the
    /// trigger is already in flight.
    pub fn begin(&self, busy_content: &str) -> Option<BusyGuard<'_>> {
        if self.in_flight.replace(true) {
            return None;
        }
        let original_content = self.element.content();
        let was_disabled = self.element.is_disabled();
        self.element.set_content(busy_content);
        self.element.set_disabled(true);
        Some(BusyGuard {
            handle: self,
            original_content,
            was_disabled,
        })
    }
}

/// Restores the trigger's content and disabled state when dropped.
pub struct BusyGuard<'a> {
    handle: &'a TriggerHandle,
    original_content: String,
    was_disabled: bool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let element = &self.handle.element;
        element.set_content(&self.original_content);
        element.set_disabled(self.was_disabled);
        self.handle.in_flight.set(false);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    pub struct FakeTrigger {
        pub content: RefCell<String>,
        pub disabled: Cell<bool>,
    }

    impl FakeTrigger {
        pub fn new(content: &str) -> Rc<Self> {
            Rc::new(Self {
                content: RefCell::new(content.to_string()),
                disabled: Cell::new(false),
            })
        }
    }

    impl ActionTrigger for FakeTrigger {
        fn content(&self) -> String {
            self.content.borrow().clone()
        }

        fn set_content(&self, content: &str) {
            *self.content.borrow_mut() = content.to_string();
        }

        fn is_disabled(&self) -> bool {
            self.disabled.get()
        }

        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
        }
    }
}
