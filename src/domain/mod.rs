//! Domain aggregates exposed by the CRM service layer.

pub mod broadcast;
pub mod chat;
pub mod client;
pub mod settings;
pub mod types;
pub mod user;
