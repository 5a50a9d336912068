use std::sync::Arc;

use crate::biz_service::message_service::MessageService;
use crate::biz_service::user_service::UserService;
use crate::repository::memory::{MemoryAccountRepository, MemoryMessageRepository};

pub mod biz_service;
pub mod repository;

/// 用内存仓储构建目录与消息服务
pub fn init_memory_services() -> (Arc<UserService>, Arc<MessageService>) {
    let user_service = UserService::new(Arc::new(MemoryAccountRepository::new()));
    let message_service = MessageService::new(Arc::new(MemoryMessageRepository::new()));
    (Arc::new(user_service), Arc::new(message_service))
}
