//! Transient status banners.
//!
//! `NotificationPresenter` decides what a banner says, how it looks and how
//! long it lives. Where it appears is up to the `NotificationSurface` it was
//! built with: the page body in the browser, a recording surface in tests.
//! Banners stack without deduplication or limit.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Unrecognized names fall back to `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#28a745",
            Severity::Error => "#dc3545",
            Severity::Warning => "#ffc107",
            Severity::Info => "#17a2b8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Time after which the banner removes itself.
    pub lifetime: Duration,
}

impl Notification {
    pub fn css_class(&self) -> String {
        format!("notification {}", self.severity.as_str())
    }
}

/// A place to mount transient UI.
///
/// The surface owns the banner once mounted: it removes it on user dismissal
/// and when `lifetime` elapses, whichever comes first.
pub trait NotificationSurface {
    fn mount(&self, notification: &Notification);
}

pub struct NotificationPresenter {
    surface: Rc<dyn NotificationSurface>,
    lifetime: Duration,
}

impl NotificationPresenter {
    pub fn new(surface: Rc<dyn NotificationSurface>, lifetime: Duration) -> Self {
        Self { surface, lifetime }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Notification {
        let notification = Notification {
            id: NotificationId(Uuid::new_v4()),
            message: message.into(),
            severity,
            lifetime: self.lifetime,
        };
        log::debug!(
            "{} {}: {}",
            notification.id,
            severity.as_str(),
            notification.message
        );
        self.surface.mount(&notification);
        notification
    }
}
