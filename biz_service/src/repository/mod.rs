use async_trait::async_trait;
use common::errors::AppError;
use common::models::{Account, Message};

pub mod memory;

/// 账号存储
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// email 未被占用时写入，返回是否写入；检查与写入必须是同一个原子步骤
    async fn insert_if_absent(&self, account: &Account) -> Result<bool, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;
    /// 按写入顺序返回全部账号
    async fn query_all(&self) -> Result<Vec<Account>, AppError>;
}

/// 消息存储，只追加
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: &Message) -> Result<(), AppError>;
    /// 两人之间的全部消息，按写入顺序
    async fn find_between(&self, a: &str, b: &str) -> Result<Vec<Message>, AppError>;
}
