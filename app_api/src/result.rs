use biz_service::biz_service::message_service::MessageService;
use biz_service::biz_service::user_service::UserService;
use biz_service::init_memory_services;
use common::models::UserProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// 请求处理共享状态，通过 `web::Data` 注入
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub message_service: Arc<MessageService>,
}

impl AppState {
    /// 内存存储
    pub fn new() -> Self {
        let (user_service, message_service) = init_memory_services();
        Self::with_services(user_service, message_service)
    }

    pub fn with_services(user_service: Arc<UserService>, message_service: Arc<MessageService>) -> Self {
        Self { user_service, message_service }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

pub fn result() -> ApiResponse {
    ApiResponse { success: true }
}

pub fn result_user(user: UserProfile) -> UserResponse {
    UserResponse { success: true, user }
}
