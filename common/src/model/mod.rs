pub mod integration;
pub mod sync_action;
