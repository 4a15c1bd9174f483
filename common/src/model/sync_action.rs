use std::fmt;
use std::str::FromStr;

/// Path segment of the connection test endpoint.
pub const TEST_API_ACTION: &str = "test_api";

/// Bulk synchronization operations exposed by the supplier endpoints.
///
/// The wire name doubles as the last path segment of the endpoint and as the
/// value of the `data-sync-action` attribute on the admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncAction {
    Products,
    AllEntities,
    Staff,
    DeliveryMethods,
    OrderStatuses,
    ClientGroups,
    Clients,
    Orders,
}

impl SyncAction {
    pub const ALL: [SyncAction; 8] = [
        SyncAction::Products,
        SyncAction::AllEntities,
        SyncAction::Staff,
        SyncAction::DeliveryMethods,
        SyncAction::OrderStatuses,
        SyncAction::ClientGroups,
        SyncAction::Clients,
        SyncAction::Orders,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SyncAction::Products => "sync_products",
            SyncAction::AllEntities => "sync_all_entities",
            SyncAction::Staff => "sync_staff",
            SyncAction::DeliveryMethods => "sync_delivery_methods",
            SyncAction::OrderStatuses => "sync_order_statuses",
            SyncAction::ClientGroups => "sync_client_groups",
            SyncAction::Clients => "sync_clients",
            SyncAction::Orders => "sync_orders",
        }
    }

    /// Prompt shown before the action is sent.
    pub fn default_confirmation(self) -> &'static str {
        match self {
            SyncAction::Products => {
                "Are you sure you want to synchronize products? This may take a while."
            }
            SyncAction::AllEntities => {
                "Are you sure you want to synchronize all entities? This may take a long time."
            }
            SyncAction::Staff => "Synchronize staff with the API?",
            SyncAction::DeliveryMethods => "Synchronize delivery methods with the API?",
            SyncAction::OrderStatuses => "Synchronize order statuses with the API?",
            SyncAction::ClientGroups => "Synchronize client groups with the API?",
            SyncAction::Clients => "Synchronize clients with the API?",
            SyncAction::Orders => "Synchronize orders with the API?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSyncAction(pub String);

impl fmt::Display for UnknownSyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sync action `{}`", self.0)
    }
}

impl std::error::Error for UnknownSyncAction {}

impl FromStr for SyncAction {
    type Err = UnknownSyncAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SyncAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownSyncAction(s.to_string()))
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
