use crate::errors::ClientError;
use async_trait::async_trait;
use common::models::{Credentials, Message, NewAccount, SendMessage, UserProfile};

pub mod http_gateway;

pub use http_gateway::HttpGateway;

/// 会话控制器访问后端的通道；身份只靠客户端自报的 email
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn register(&self, account: &NewAccount) -> Result<UserProfile, ClientError>;
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError>;
    async fn list_users(&self) -> Result<Vec<UserProfile>, ClientError>;
    async fn send_message(&self, message: &SendMessage) -> Result<(), ClientError>;
    async fn list_messages(&self, from: &str, to: &str) -> Result<Vec<Message>, ClientError>;
}
