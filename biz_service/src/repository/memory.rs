use async_trait::async_trait;
use common::errors::AppError;
use common::models::{Account, Message};
use tokio::sync::RwLock;

use crate::repository::{AccountRepository, MessageRepository};

/// 内存账号存储（进程退出即丢失）
#[derive(Default)]
pub struct MemoryAccountRepository {
    data: RwLock<Vec<Account>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn insert_if_absent(&self, account: &Account) -> Result<bool, AppError> {
        let mut data = self.data.write().await;
        if data.iter().any(|a| a.email == account.email) {
            return Ok(false);
        }
        data.push(account.clone());
        Ok(true)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let data = self.data.read().await;
        Ok(data.iter().find(|a| a.email == email).cloned())
    }

    async fn query_all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.data.read().await.clone())
    }
}

/// 内存消息存储
#[derive(Default)]
pub struct MemoryMessageRepository {
    data: RwLock<Vec<Message>>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn insert(&self, message: &Message) -> Result<(), AppError> {
        self.data.write().await.push(message.clone());
        Ok(())
    }

    async fn find_between(&self, a: &str, b: &str) -> Result<Vec<Message>, AppError> {
        let data = self.data.read().await;
        Ok(data.iter().filter(|m| m.is_between(a, b)).cloned().collect())
    }
}
