/// Integration type selected for a supplier record.
///
/// Only `Autoparts` talks to a remote supplier API, so it is the only
/// variant that needs connection credentials. Values the page sends that we
/// do not know about are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationType {
    Manual,
    Autoparts,
    Other(String),
}

impl IntegrationType {
    pub const AUTOPARTS: &'static str = "autoparts";
    pub const MANUAL: &'static str = "manual";

    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::AUTOPARTS => IntegrationType::Autoparts,
            Self::MANUAL => IntegrationType::Manual,
            other => IntegrationType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IntegrationType::Manual => Self::MANUAL,
            IntegrationType::Autoparts => Self::AUTOPARTS,
            IntegrationType::Other(raw) => raw,
        }
    }

    /// Whether url, login and secret must be filled in.
    pub fn requires_credentials(&self) -> bool {
        matches!(self, IntegrationType::Autoparts)
    }
}
