//! Error types for the supplier admin control surface.
//!
//! Validation problems are not errors here: they are collected as
//! `ValidationError` values and rendered next to the fields. The types below
//! cover configuration loading and the action dispatch paths, where every
//! variant has already been reported to the user by the time it is returned.

use thiserror::Error;

/// Failure to reach the endpoint or to read its answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server answered with status {0} and no readable body")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Why a test or sync action did not complete successfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("a request for this trigger is already in flight")]
    AlreadyRunning,

    #[error("invalid action identifier `{0}`")]
    InvalidAction(String),

    #[error("the supplier has no identifier yet, save it first")]
    MissingRecordId,

    #[error("the user declined the confirmation")]
    Declined,

    #[error("server rejected the action: {0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}
