pub mod message_service;
pub mod user_service;
