pub mod actions;
pub mod credentials;
pub mod notifications;
