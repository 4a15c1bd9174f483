//! `NotificationSurface` that renders banners into the page.
//!
//! Banners share one fixed top-right container, created on first use inside
//! the configured root element. Each banner removes itself after its lifetime
//! or when clicked, whichever comes first. A registry keyed by
//! `NotificationId` keeps the click handler alive until then and makes a
//! second removal a no-op.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::components::notifications::{Notification, NotificationId, NotificationSurface};

const STACK_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("z-index", "10000"),
    ("display", "flex"),
    ("flex-direction", "column"),
    ("gap", "10px"),
    ("max-width", "400px"),
];

const BANNER_STYLE: &[(&str, &str)] = &[
    ("padding", "15px 20px"),
    ("border-radius", "5px"),
    ("color", "white"),
    ("font-weight", "500"),
    ("word-wrap", "break-word"),
    ("cursor", "pointer"),
];

struct Mounted {
    element: HtmlElement,
    _on_click: Closure<dyn FnMut(Event)>,
}

type Registry = Rc<RefCell<HashMap<NotificationId, Mounted>>>;

/// Mounts banners in a fixed top-right stack inside `root`.
pub struct DomNotificationSurface {
    document: Document,
    root: Element,
    stack: RefCell<Option<HtmlElement>>,
    mounted: Registry,
}

impl DomNotificationSurface {
    pub fn new(document: Document, root: Element) -> Self {
        Self {
            document,
            root,
            stack: RefCell::new(None),
            mounted: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    fn stack(&self) -> Option<HtmlElement> {
        if let Some(stack) = self.stack.borrow().as_ref() {
            return Some(stack.clone());
        }

        let stack: HtmlElement = self.document.create_element("div").ok()?.unchecked_into();
        stack.set_class_name("notification-stack");
        apply_style(&stack, STACK_STYLE);
        self.root.append_child(&stack).ok()?;
        *self.stack.borrow_mut() = Some(stack.clone());
        Some(stack)
    }
}

fn apply_style(element: &HtmlElement, properties: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in properties {
        style.set_property(name, value).ok();
    }
}

fn remove(registry: &Registry, id: &NotificationId) {
    let removed = registry.borrow_mut().remove(id);
    if let Some(mounted) = removed {
        mounted.element.remove();
    }
}

impl NotificationSurface for DomNotificationSurface {
    fn mount(&self, notification: &Notification) {
        let Some(stack) = self.stack() else {
            log::warn!("no place to show notification: {}", notification.message);
            return;
        };
        let Ok(banner) = self.document.create_element("div") else {
            return;
        };
        let banner: HtmlElement = banner.unchecked_into();
        banner.set_class_name(&notification.css_class());
        banner.set_id(&notification.id.to_string());
        banner.set_text_content(Some(&notification.message));
        apply_style(&banner, BANNER_STYLE);
        banner
            .style()
            .set_property("background-color", notification.severity.background())
            .ok();

        // The click handler lives in the registry, so its removal is deferred
        // until the handler has returned.
        let on_click = {
            let registry = self.mounted.clone();
            let id = notification.id;
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let registry = registry.clone();
                spawn_local(async move { remove(&registry, &id) });
            })
        };
        if banner
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_err()
            || stack.append_child(&banner).is_err()
        {
            return;
        }
        self.mounted.borrow_mut().insert(
            notification.id,
            Mounted {
                element: banner,
                _on_click: on_click,
            },
        );

        let registry = self.mounted.clone();
        let id = notification.id;
        let millis = u32::try_from(notification.lifetime.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            remove(&registry, &id);
        });
    }
}
