//! DTO modules that bridge services with the JSON API.

pub mod chats;
pub mod dashboard;
pub mod roster;
pub mod session;
pub mod users;
