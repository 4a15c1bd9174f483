//! Page wiring: builds the components once the document is interactive and
//! attaches the event listeners.
//!
//! Every lookup is optional. A page without the selector, the form or any
//! trigger still gets the remaining behavior.

mod messages;
mod state;
mod update;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::components::actions::transport::GlooTransport;
use crate::components::actions::trigger::TriggerHandle;
use crate::components::actions::ActionDispatcher;
use crate::components::credentials::validation::FormValidator;
use crate::components::notifications::{NotificationPresenter, Severity};
use crate::config::AdminConfig;
use crate::dom::form::DomCredentialForm;
use crate::dom::notifications::DomNotificationSurface;
use crate::dom::page::DomPage;
use crate::dom::trigger::DomTrigger;
use crate::dom::{
    control_value, DISCRIMINATOR_ID, SYNC_ACTION_ATTRIBUTE, SYNC_TRIGGER_SELECTOR,
    TEST_TRIGGER_SELECTOR,
};
use crate::logger;

use messages::Msg;
use state::SupplierAdmin;
use update::update;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
    static LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = const { RefCell::new(Vec::new()) };
    static PRESENTER: RefCell<Option<Rc<NotificationPresenter>>> = const { RefCell::new(None) };
}

/// Runs `init` now if the document is already parsed, otherwise on
/// `DOMContentLoaded`.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("no document, supplier admin not started");
        return;
    };

    if document.ready_state() != "loading" {
        init();
        return;
    }
    let on_ready = Closure::<dyn FnMut(Event)>::new(|_event: Event| init());
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_ok()
    {
        keep_alive(on_ready);
    }
}

/// Shows a notification from page scripts. Unknown severities are shown as
/// `info`.
#[wasm_bindgen]
pub fn notify(message: String, severity: String) {
    PRESENTER.with(|presenter| match presenter.borrow().as_ref() {
        Some(presenter) => {
            presenter.notify(message, Severity::parse(&severity));
        }
        None => log::warn!("notify called before the supplier admin started"),
    });
}

fn init() {
    if STARTED.with(|started| started.replace(true)) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let page = Rc::new(DomPage::new(window, document.clone()));
    let config = Rc::new(page.load_config());
    if let Ok(level) = config.log_level_filter() {
        logger::init(level);
    }

    let Some(root) = notification_root(&document, &config) else {
        log::error!("page has no element to mount notifications in");
        return;
    };
    let notifier = Rc::new(NotificationPresenter::new(
        Rc::new(DomNotificationSurface::new(document.clone(), root)),
        config.notification_lifetime(),
    ));
    PRESENTER.with(|presenter| *presenter.borrow_mut() = Some(notifier.clone()));

    let form = Rc::new(DomCredentialForm::new(document.clone()));
    let is_existing_record = config
        .record_state
        .is_existing(page.has_continue_marker());
    let app = Rc::new(SupplierAdmin {
        form: form.clone(),
        validator: FormValidator::new(form, is_existing_record),
        dispatcher: Rc::new(ActionDispatcher::new(
            config,
            page.clone(),
            page,
            Rc::new(GlooTransport),
            notifier,
        )),
    });

    attach_discriminator(&document, &app);
    attach_form(&document, &app);
    attach_triggers(&document, &app);
    log::info!("supplier admin ready (existing record: {is_existing_record})");
}

fn notification_root(document: &Document, config: &AdminConfig) -> Option<Element> {
    config
        .notification_root
        .as_deref()
        .and_then(|selector| document.query_selector(selector).ok().flatten())
        .or_else(|| document.body().map(Element::from))
        .or_else(|| document.document_element())
}

fn attach_discriminator(document: &Document, app: &Rc<SupplierAdmin>) {
    let Some(selector) = document.get_element_by_id(DISCRIMINATOR_ID) else {
        log::debug!("no #{DISCRIMINATOR_ID}, credential fields left as rendered");
        return;
    };

    if let Some(value) = control_value(&selector) {
        update(app, Msg::DiscriminatorChanged(value));
    }
    let source = selector.clone();
    listen(&selector, "change", app, move |_event| {
        control_value(&source).map(Msg::DiscriminatorChanged)
    });
}

fn attach_form(document: &Document, app: &Rc<SupplierAdmin>) {
    match document.query_selector("form").ok().flatten() {
        Some(form) => listen(&form, "submit", app, |event| Some(Msg::Submit(event))),
        None => log::debug!("no form, validation disabled"),
    }
}

fn attach_triggers(document: &Document, app: &Rc<SupplierAdmin>) {
    if let Some(element) = document
        .query_selector(TEST_TRIGGER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let trigger = trigger_handle(&element);
        listen(&element, "click", app, move |event| {
            event.prevent_default();
            Some(Msg::TestConnection(trigger.clone()))
        });
    }

    let Ok(nodes) = document.query_selector_all(SYNC_TRIGGER_SELECTOR) else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let action = element
            .get_attribute(SYNC_ACTION_ATTRIBUTE)
            .unwrap_or_default();
        let trigger = trigger_handle(&element);
        listen(&element, "click", app, move |event| {
            event.prevent_default();
            Some(Msg::Sync {
                action: action.clone(),
                trigger: trigger.clone(),
            })
        });
    }
}

fn trigger_handle(element: &HtmlElement) -> Rc<TriggerHandle> {
    Rc::new(TriggerHandle::new(Rc::new(DomTrigger::new(element.clone()))))
}

/// Adds a listener that turns `event` into a `Msg` and feeds it to `update`.
fn listen(
    target: &EventTarget,
    event: &str,
    app: &Rc<SupplierAdmin>,
    to_msg: impl Fn(Event) -> Option<Msg> + 'static,
) {
    let app = Rc::clone(app);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(msg) = to_msg(event) {
            update(&app, msg);
        }
    });
    match target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
        Ok(()) => keep_alive(handler),
        Err(err) => log::warn!("could not listen to `{event}`: {err:?}"),
    }
}

fn keep_alive(handler: Closure<dyn FnMut(Event)>) {
    LISTENERS.with(|listeners| listeners.borrow_mut().push(handler));
}
