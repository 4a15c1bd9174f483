//! Page-level configuration.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="supplier-admin-config">`. Every field
//! is optional; missing fields keep their defaults. The resulting
//! `AdminConfig` is immutable and handed to the components at construction.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use common::model::sync_action::SyncAction;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// How the validator decides whether the record already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    /// Existing iff the page carries the save-and-continue marker.
    #[default]
    Auto,
    New,
    Existing,
}

impl RecordState {
    pub fn is_existing(self, has_continue_marker: bool) -> bool {
        match self {
            RecordState::Auto => has_continue_marker,
            RecordState::New => false,
            RecordState::Existing => true,
        }
    }
}

/// User-facing texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub testing_busy: String,
    pub syncing_busy: String,
    pub save_first: String,
    pub invalid_action: String,
    pub test_success: String,
    pub test_failure_prefix: String,
    pub test_transport_failure: String,
    pub sync_success: String,
    pub sync_failure_prefix: String,
    pub sync_transport_failure: String,
    pub unknown_error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            testing_busy: r#"<i class="fas fa-spinner fa-spin"></i> Testing..."#.to_string(),
            syncing_busy: r#"<i class="fas fa-spinner fa-spin"></i> Synchronizing..."#
                .to_string(),
            save_first: "Save the supplier first".to_string(),
            invalid_action: "Unknown action".to_string(),
            test_success: "API connection succeeded!".to_string(),
            test_failure_prefix: "Connection error".to_string(),
            test_transport_failure: "Error while testing the API".to_string(),
            sync_success: "Synchronization completed successfully!".to_string(),
            sync_failure_prefix: "Synchronization error".to_string(),
            sync_transport_failure: "Error while running the synchronization".to_string(),
            unknown_error: "unknown error".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Prefix of the supplier endpoints, e.g. `/catalog`.
    pub resource_root: String,
    pub notification_lifetime_ms: u32,
    /// Selector of the element notifications are mounted in; the page body
    /// when unset or not found.
    pub notification_root: Option<String>,
    pub log_level: String,
    pub record_state: RecordState,
    /// Confirmation prompt per sync action wire name.
    pub confirmations: HashMap<String, String>,
    pub fallback_confirmation: String,
    pub labels: Labels,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            resource_root: "/catalog".to_string(),
            notification_lifetime_ms: 5000,
            notification_root: None,
            log_level: "info".to_string(),
            record_state: RecordState::Auto,
            confirmations: SyncAction::ALL
                .into_iter()
                .map(|action| (action.to_string(), action.default_confirmation().to_string()))
                .collect(),
            fallback_confirmation: "Are you sure you want to perform this action?".to_string(),
            labels: Labels::default(),
        }
    }
}

impl AdminConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AdminConfig = serde_json::from_str(raw)?;
        config.log_level_filter()?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.notification_lifetime_ms))
    }

    pub fn confirmation_for(&self, action: &str) -> &str {
        self.confirmations
            .get(action)
            .map(String::as_str)
            .unwrap_or(&self.fallback_confirmation)
    }

    /// `<root>/suppliers/<id>/<action>/`
    pub fn endpoint(&self, record_id: &str, action: &str) -> String {
        format!(
            "{}/suppliers/{}/{}/",
            self.resource_root.trim_end_matches('/'),
            record_id,
            action
        )
    }
}
