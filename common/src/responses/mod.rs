use serde::{Deserialize, Serialize};

/// Body returned by the supplier `test_api` and `sync_*` endpoints.
///
/// `success` is the only field the client relies on. The product counters are
/// only sent by `sync_products` after a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_created: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_updated: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors_count: Option<u64>,
}

impl ActionResponse {
    /// Best description of a rejection: `error`, then `message`. Blank values
    /// are skipped.
    pub fn failure_detail(&self) -> Option<&str> {
        let non_blank = |detail: &&str| !detail.trim().is_empty();
        self.error
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.message.as_deref().filter(non_blank))
    }

    pub fn has_product_stats(&self) -> bool {
        self.products_created.is_some()
            || self.products_updated.is_some()
            || self.errors_count.is_some()
    }
}
