//! Remote actions on the current supplier: connection test and entity sync.
//!
//! Both follow the same sequence. Resolve the record id, ask for
//! confirmation (sync only), mark the trigger busy, POST once, report the
//! outcome as a notification, restore the trigger. The trigger is restored by
//! `BusyGuard`, so it happens on every path out of `dispatch`.

pub mod record;
pub mod transport;
pub mod trigger;

use std::rc::Rc;

use common::model::sync_action::{SyncAction, TEST_API_ACTION};
use common::responses::ActionResponse;
use num_format::{Locale, ToFormattedString};

use crate::components::notifications::{NotificationPresenter, Severity};
use crate::config::AdminConfig;
use crate::error::{DispatchError, TransportError};

use record::{resolve_record_id, PageContext, RecordId};
use transport::ActionTransport;
use trigger::TriggerHandle;

/// Blocking yes/no question to the user.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemoteAction<'a> {
    TestConnection,
    Sync(&'a str),
}

impl RemoteAction<'_> {
    fn path_segment(&self) -> &str {
        match self {
            RemoteAction::TestConnection => TEST_API_ACTION,
            RemoteAction::Sync(action) => action,
        }
    }
}

/// Texts used for one kind of action.
struct ActionTexts<'a> {
    busy: &'a str,
    success: &'a str,
    failure_prefix: &'a str,
    transport_failure: &'a str,
}

pub struct ActionDispatcher {
    config: Rc<AdminConfig>,
    page: Rc<dyn PageContext>,
    prompt: Rc<dyn ConfirmPrompt>,
    transport: Rc<dyn ActionTransport>,
    notifier: Rc<NotificationPresenter>,
}

impl ActionDispatcher {
    pub fn new(
        config: Rc<AdminConfig>,
        page: Rc<dyn PageContext>,
        prompt: Rc<dyn ConfirmPrompt>,
        transport: Rc<dyn ActionTransport>,
        notifier: Rc<NotificationPresenter>,
    ) -> Self {
        Self {
            config,
            page,
            prompt,
            transport,
            notifier,
        }
    }

    /// Tests the supplier's API credentials on the server.
    ///
    /// Returns the text of the success notification.
    pub async fn run_test_connection(
        &self,
        trigger: &TriggerHandle,
    ) -> Result<String, DispatchError> {
        self.dispatch(RemoteAction::TestConnection, trigger).await
    }

    /// Runs the sync action named by `action` after user confirmation.
    ///
    /// Returns the text of the success notification.
    pub async fn run_sync_action(
        &self,
        action: &str,
        trigger: &TriggerHandle,
    ) -> Result<String, DispatchError> {
        self.dispatch(RemoteAction::Sync(action), trigger).await
    }

    async fn dispatch(
        &self,
        action: RemoteAction<'_>,
        trigger: &TriggerHandle,
    ) -> Result<String, DispatchError> {
        if trigger.is_in_flight() {
            log::debug!("ignoring `{}`: already running", action.path_segment());
            return Err(DispatchError::AlreadyRunning);
        }

        let Some(record_id) = self.record_id() else {
            self.notifier
                .notify(self.config.labels.save_first.as_str(), Severity::Error);
            return Err(DispatchError::MissingRecordId);
        };

        if let RemoteAction::Sync(name) = action {
            if name.is_empty() || name.contains('/') {
                log::warn!("refusing sync action with invalid id `{name}`");
                self.notifier
                    .notify(self.config.labels.invalid_action.as_str(), Severity::Error);
                return Err(DispatchError::InvalidAction(name.to_string()));
            }
            if let Err(err) = name.parse::<SyncAction>() {
                log::warn!("{err}, sending it as is");
            }

            if !self.prompt.confirm(self.config.confirmation_for(name)) {
                log::debug!("`{name}` declined by the user");
                return Err(DispatchError::Declined);
            }
        }

        let texts = self.texts(action);
        let Some(_busy) = trigger.begin(texts.busy) else {
            return Err(DispatchError::AlreadyRunning);
        };

        let path = self
            .config
            .endpoint(record_id.as_str(), action.path_segment());
        log::info!("POST {path}");
        let result = self.transport.post(&path, &self.page.csrf_token()).await;
        self.report(&texts, result)
    }

    fn record_id(&self) -> Option<RecordId> {
        let hidden = self.page.hidden_record_id();
        resolve_record_id(&self.page.pathname(), hidden.as_deref())
    }

    fn texts(&self, action: RemoteAction<'_>) -> ActionTexts<'_> {
        let labels = &self.config.labels;
        match action {
            RemoteAction::TestConnection => ActionTexts {
                busy: &labels.testing_busy,
                success: &labels.test_success,
                failure_prefix: &labels.test_failure_prefix,
                transport_failure: &labels.test_transport_failure,
            },
            RemoteAction::Sync(_) => ActionTexts {
                busy: &labels.syncing_busy,
                success: &labels.sync_success,
                failure_prefix: &labels.sync_failure_prefix,
                transport_failure: &labels.sync_transport_failure,
            },
        }
    }

    fn report(
        &self,
        texts: &ActionTexts<'_>,
        result: Result<ActionResponse, TransportError>,
    ) -> Result<String, DispatchError> {
        match result {
            Ok(response) if response.success => {
                let message = success_message(&response, texts.success);
                self.notifier.notify(message.as_str(), Severity::Success);
                Ok(message)
            }
            Ok(response) => {
                let detail = response
                    .failure_detail()
                    .unwrap_or(&self.config.labels.unknown_error)
                    .to_string();
                self.notifier.notify(
                    format!("{}: {}", texts.failure_prefix, detail),
                    Severity::Error,
                );
                Err(DispatchError::Rejected(detail))
            }
            Err(err) => {
                log::error!("action request failed: {err}");
                self.notifier.notify(texts.transport_failure, Severity::Error);
                Err(err.into())
            }
        }
    }
}

/// Server message (or `fallback`), followed by the product counters when the
/// server sent any.
fn success_message(response: &ActionResponse, fallback: &str) -> String {
    let base = response
        .message
        .as_deref()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(fallback);
    if !response.has_product_stats() {
        return base.to_string();
    }

    let count = |value: Option<u64>| value.unwrap_or(0).to_formatted_string(&Locale::en);
    format!(
        "{base} (created: {}, updated: {}, errors: {})",
        count(response.products_created),
        count(response.products_updated),
        count(response.errors_count)
    )
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::trigger::testing::FakeTrigger;
    use super::*;
    use crate::components::notifications::testing::RecordingSurface;

    struct FakePage {
        pathname: String,
        hidden_id: Option<String>,
    }

    impl PageContext for FakePage {
        fn pathname(&self) -> String {
            self.pathname.clone()
        }

        fn hidden_record_id(&self) -> Option<String> {
            self.hidden_id.clone()
        }

        fn csrf_token(&self) -> String {
            "token-123".to_string()
        }
    }

    struct FakePrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl ConfirmPrompt for FakePrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    /// Answers with a canned result and records what the trigger looked like
    /// while the request was pending.
    struct FakeTransport {
        result: Result<ActionResponse, TransportError>,
        requests: RefCell<Vec<(String, String)>>,
        trigger: Rc<FakeTrigger>,
        trigger_during_request: RefCell<Option<(String, bool)>>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ActionTransport for FakeTransport {
        async fn post(
            &self,
            path: &str,
            csrf_token: &str,
        ) -> Result<ActionResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.requests
                .borrow_mut()
                .push((path.to_string(), csrf_token.to_string()));
            *self.trigger_during_request.borrow_mut() = Some((
                self.trigger.content.borrow().clone(),
                self.trigger.disabled.get(),
            ));
            self.result.clone()
        }
    }

    struct Harness {
        surface: Rc<RecordingSurface>,
        prompt: Rc<FakePrompt>,
        transport: Rc<FakeTransport>,
        element: Rc<FakeTrigger>,
        trigger: TriggerHandle,
        dispatcher: ActionDispatcher,
    }

    fn harness(
        pathname: &str,
        confirm: bool,
        result: Result<ActionResponse, TransportError>,
    ) -> Harness {
        let surface = Rc::new(RecordingSurface::default());
        let notifier = Rc::new(NotificationPresenter::new(
            surface.clone(),
            Duration::from_secs(5),
        ));
        let prompt = Rc::new(FakePrompt {
            answer: confirm,
            asked: RefCell::new(Vec::new()),
        });
        let element = FakeTrigger::new("Run");
        let transport = Rc::new(FakeTransport {
            result,
            requests: RefCell::new(Vec::new()),
            trigger: element.clone(),
            trigger_during_request: RefCell::new(None),
            calls: Cell::new(0),
        });
        let page = Rc::new(FakePage {
            pathname: pathname.to_string(),
            hidden_id: None,
        });
        let dispatcher = ActionDispatcher::new(
            Rc::new(AdminConfig::default()),
            page,
            prompt.clone(),
            transport.clone(),
            notifier,
        );
        Harness {
            surface,
            prompt,
            transport,
            trigger: TriggerHandle::new(element.clone()),
            element,
            dispatcher,
        }
    }

    fn ok(json: &str) -> Result<ActionResponse, TransportError> {
        Ok(serde_json::from_str(json).unwrap())
    }

    const CHANGE_PATH: &str = "/admin/catalog/suppliers/42/change/";

    #[test]
    fn confirmed_sync_posts_and_reports_server_message() {
        let h = harness(
            CHANGE_PATH,
            true,
            ok(r#"{"success":true,"message":"Synced 10 items"}"#),
        );

        let outcome = block_on(h.dispatcher.run_sync_action("sync_products", &h.trigger));

        assert_eq!(outcome, Ok("Synced 10 items".to_string()));
        assert_eq!(
            *h.transport.requests.borrow(),
            vec![(
                "/catalog/suppliers/42/sync_products/".to_string(),
                "token-123".to_string()
            )]
        );
        assert_eq!(
            h.prompt.asked.borrow().as_slice(),
            [AdminConfig::default()
                .confirmation_for("sync_products")
                .to_string()]
        );
        assert_eq!(
            h.surface.messages(),
            vec![(Severity::Success, "Synced 10 items".to_string())]
        );
    }

    #[test]
    fn rejection_reports_server_error_and_restores_trigger() {
        let h = harness(
            CHANGE_PATH,
            true,
            ok(r#"{"success":false,"error":"timeout"}"#),
        );

        let outcome = block_on(h.dispatcher.run_sync_action("sync_orders", &h.trigger));

        assert_eq!(outcome, Err(DispatchError::Rejected("timeout".to_string())));
        let messages = h.surface.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, Severity::Error);
        assert!(messages[0].1.contains("timeout"));
        assert_eq!(*h.element.content.borrow(), "Run");
        assert!(!h.element.disabled.get());
        assert!(!h.trigger.is_in_flight());
    }

    #[test]
    fn trigger_is_busy_while_the_request_is_pending() {
        let h = harness(CHANGE_PATH, true, ok(r#"{"success":true}"#));

        let outcome = block_on(h.dispatcher.run_test_connection(&h.trigger));

        assert_eq!(
            outcome,
            Ok(AdminConfig::default().labels.test_success.clone())
        );
        assert_eq!(
            *h.transport.trigger_during_request.borrow(),
            Some((AdminConfig::default().labels.testing_busy.clone(), true))
        );
        assert_eq!(*h.element.content.borrow(), "Run");
        assert!(!h.element.disabled.get());
    }

    #[test]
    fn test_connection_skips_confirmation_and_uses_test_api_path() {
        let h = harness(CHANGE_PATH, false, ok(r#"{"success":true,"message":"OK"}"#));

        let outcome = block_on(h.dispatcher.run_test_connection(&h.trigger));

        assert_eq!(outcome, Ok("OK".to_string()));
        assert!(h.prompt.asked.borrow().is_empty());
        assert_eq!(
            h.transport.requests.borrow()[0].0,
            "/catalog/suppliers/42/test_api/"
        );
    }

    #[test]
    fn transport_failure_shows_generic_text_and_restores_trigger() {
        let h = harness(
            CHANGE_PATH,
            true,
            Err(TransportError::Network("connection reset by peer".to_string())),
        );

        let outcome = block_on(h.dispatcher.run_test_connection(&h.trigger));

        assert!(matches!(outcome, Err(DispatchError::Transport(_))));
        let messages = h.surface.messages();
        assert_eq!(
            messages,
            vec![(
                Severity::Error,
                AdminConfig::default().labels.test_transport_failure.clone()
            )]
        );
        assert!(!messages[0].1.contains("reset"));
        assert_eq!(*h.element.content.borrow(), "Run");
        assert!(!h.element.disabled.get());
    }

    #[test]
    fn missing_record_id_never_sends_a_request() {
        for action in ["sync_products", "sync_clients", "sync_whatever"] {
            let h = harness("/admin/catalog/suppliers/add/", true, ok("{}"));

            let outcome = block_on(h.dispatcher.run_sync_action(action, &h.trigger));

            assert_eq!(outcome, Err(DispatchError::MissingRecordId));
            assert_eq!(h.transport.calls.get(), 0);
            assert!(h.prompt.asked.borrow().is_empty());
            assert_eq!(
                h.surface.messages(),
                vec![(
                    Severity::Error,
                    AdminConfig::default().labels.save_first.clone()
                )]
            );
            assert_eq!(*h.element.content.borrow(), "Run");
        }
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let h = harness(CHANGE_PATH, false, ok(r#"{"success":true}"#));

        let outcome = block_on(h.dispatcher.run_sync_action("sync_staff", &h.trigger));

        assert_eq!(outcome, Err(DispatchError::Declined));
        assert_eq!(h.transport.calls.get(), 0);
        assert!(h.surface.messages().is_empty());
        assert_eq!(*h.element.content.borrow(), "Run");
        assert!(!h.element.disabled.get());
    }

    #[test]
    fn unknown_action_uses_fallback_confirmation() {
        let h = harness(CHANGE_PATH, true, ok(r#"{"success":true}"#));

        let outcome = block_on(h.dispatcher.run_sync_action("sync_warehouses", &h.trigger));

        assert_eq!(
            outcome,
            Ok(AdminConfig::default().labels.sync_success.clone())
        );
        assert_eq!(
            h.prompt.asked.borrow()[0],
            AdminConfig::default().fallback_confirmation
        );
        assert_eq!(
            h.transport.requests.borrow()[0].0,
            "/catalog/suppliers/42/sync_warehouses/"
        );
    }

    #[test]
    fn in_flight_trigger_ignores_new_invocations() {
        let h = harness(CHANGE_PATH, true, ok(r#"{"success":true}"#));
        let _busy = h.trigger.begin("busy").unwrap();

        let outcome = block_on(h.dispatcher.run_sync_action("sync_products", &h.trigger));

        assert_eq!(outcome, Err(DispatchError::AlreadyRunning));
        assert_eq!(h.transport.calls.get(), 0);
        assert!(h.prompt.asked.borrow().is_empty());
        assert!(h.surface.messages().is_empty());
    }

    #[test]
    fn malformed_action_ids_are_refused() {
        for action in ["", "../delete", "sync/products"] {
            let h = harness(CHANGE_PATH, true, ok(r#"{"success":true}"#));

            let outcome = block_on(h.dispatcher.run_sync_action(action, &h.trigger));

            assert_eq!(outcome, Err(DispatchError::InvalidAction(action.to_string())));
            assert_eq!(h.transport.calls.get(), 0);
            assert_eq!(h.surface.messages()[0].0, Severity::Error);
        }
    }

    #[test]
    fn unsaved_record_reports_save_first_before_checking_action_id() {
        for action in ["", "../x"] {
            let h = harness("/admin/catalog/suppliers/add/", true, ok(r#"{"success":true}"#));

            let outcome = block_on(h.dispatcher.run_sync_action(action, &h.trigger));

            assert_eq!(outcome, Err(DispatchError::MissingRecordId));
            assert_eq!(h.transport.calls.get(), 0);
            assert_eq!(
                h.surface.messages(),
                vec![(
                    Severity::Error,
                    AdminConfig::default().labels.save_first.clone()
                )]
            );
        }
    }

    #[test]
    fn rejection_without_error_uses_message_then_placeholder() {
        let h = harness(
            CHANGE_PATH,
            true,
            ok(r#"{"success":false,"message":"Only available for autoparts"}"#),
        );
        let outcome = block_on(h.dispatcher.run_sync_action("sync_all_entities", &h.trigger));
        assert_eq!(
            outcome,
            Err(DispatchError::Rejected(
                "Only available for autoparts".to_string()
            ))
        );

        let h = harness(CHANGE_PATH, true, ok(r#"{"success":false}"#));
        let outcome = block_on(h.dispatcher.run_sync_action("sync_all_entities", &h.trigger));
        assert_eq!(
            outcome,
            Err(DispatchError::Rejected(
                AdminConfig::default().labels.unknown_error.clone()
            ))
        );
    }

    #[test]
    fn product_counters_are_appended() {
        let response: ActionResponse = serde_json::from_str(
            r#"{"success":true,"message":"Done","products_created":1234,"products_updated":5}"#,
        )
        .unwrap();
        assert_eq!(
            success_message(&response, "fallback"),
            "Done (created: 1,234, updated: 5, errors: 0)"
        );

        let response: ActionResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(success_message(&response, "fallback"), "fallback");
    }
}
