use crate::repository::MessageRepository;
use common::errors::AppError;
use common::models::Message;
use common::util::date_util::{now, time_to_str};
use log::debug;
use std::sync::Arc;

/// 消息日志：追加与按会话查询，不校验参与者和内容
pub struct MessageService {
    pub dao: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(dao: Arc<dyn MessageRepository>) -> Self {
        Self { dao }
    }

    pub async fn append(&self, from: &str, to: &str, text: &str) -> Result<Message, AppError> {
        let message = Message { from: from.to_string(), to: to.to_string(), text: text.to_string(), date: now() };
        self.dao.insert(&message).await?;
        debug!("message {} -> {} at {}", from, to, time_to_str(&message.date));
        Ok(message)
    }

    /// a 与 b 之间双向的消息，时间顺序
    pub async fn list_between(&self, a: &str, b: &str) -> Result<Vec<Message>, AppError> {
        self.dao.find_between(a, b).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryMessageRepository;

    fn service() -> MessageService {
        MessageService::new(Arc::new(MemoryMessageRepository::new()))
    }

    #[tokio::test]
    async fn list_between_is_symmetric() {
        let svc = service();
        svc.append("a@x", "b@x", "hola").await.unwrap();
        svc.append("b@x", "a@x", "qué tal").await.unwrap();
        svc.append("a@x", "c@x", "otro chat").await.unwrap();
        svc.append("a@x", "b@x", "bien").await.unwrap();

        let ab = svc.list_between("a@x", "b@x").await.unwrap();
        let ba = svc.list_between("b@x", "a@x").await.unwrap();
        assert_eq!(ab, ba);
        let texts: Vec<_> = ab.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["hola", "qué tal", "bien"]);
    }

    #[tokio::test]
    async fn accepts_empty_text_and_unknown_participants() {
        let svc = service();
        let msg = svc.append("ghost@x", "nobody@x", "").await.unwrap();
        assert_eq!(msg.text, "");
        assert_eq!(svc.list_between("nobody@x", "ghost@x").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unrelated_pair_is_empty() {
        let svc = service();
        svc.append("a@x", "b@x", "hola").await.unwrap();
        assert!(svc.list_between("a@x", "z@x").await.unwrap().is_empty());
    }
}
