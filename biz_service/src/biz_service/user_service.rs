use crate::repository::AccountRepository;
use common::errors::AppError;
use common::models::{Account, NewAccount, UserProfile};
use common::util::common_utils::IdSequence;
use log::{info, warn};
use std::sync::Arc;

/// 用户目录：注册、登录校验、用户列表
pub struct UserService {
    pub dao: Arc<dyn AccountRepository>,
    ids: IdSequence,
}

impl UserService {
    pub fn new(dao: Arc<dyn AccountRepository>) -> Self {
        Self { dao, ids: IdSequence::default() }
    }

    /// 注册；email 已存在时返回 `DuplicateEmail`，原账号不变
    pub async fn register(&self, candidate: NewAccount) -> Result<Account, AppError> {
        let account = Account::from_new(self.ids.next_id(), candidate);
        if !self.dao.insert_if_absent(&account).await? {
            warn!("register rejected, email taken: {}", account.email);
            return Err(AppError::DuplicateEmail);
        }
        info!("registered user {} ({})", account.id, account.email);
        Ok(account)
    }

    /// email 与密码都完全相等才算通过
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AppError> {
        match self.dao.find_by_email(email).await? {
            Some(account) if account.password == password => Ok(account),
            _ => {
                warn!("login failed for {}", email);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// 全部用户（注册顺序），不含密码
    pub async fn list_all(&self) -> Result<Vec<UserProfile>, AppError> {
        let accounts = self.dao.query_all().await?;
        Ok(accounts.iter().map(Account::to_profile).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryAccountRepository;
    use common::models::Gender;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryAccountRepository::new()))
    }

    fn candidate(email: &str, name: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            password: "p".to_string(),
            name: name.to_string(),
            age: Some(60),
            gender: Gender::Female,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_first_kept() {
        let svc = service();
        let first = svc.register(candidate("a@x", "Ana")).await.unwrap();
        let err = svc.register(candidate("a@x", "Impostor")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ana");
        assert_eq!(all[0].id, first.id);
    }

    #[tokio::test]
    async fn ids_are_distinct() {
        let svc = service();
        let a = svc.register(candidate("a@x", "A")).await.unwrap();
        let b = svc.register(candidate("b@x", "B")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn authenticate_requires_exact_match() {
        let svc = service();
        svc.register(candidate("a@x", "Ana")).await.unwrap();

        assert_eq!(svc.authenticate("a@x", "p").await.unwrap().name, "Ana");
        assert!(matches!(svc.authenticate("a@x", "P").await, Err(AppError::InvalidCredentials)));
        assert!(matches!(svc.authenticate("A@x", "p").await, Err(AppError::InvalidCredentials)));
        assert!(matches!(svc.authenticate("nobody@x", "p").await, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn list_all_keeps_registration_order() {
        let svc = service();
        for (email, name) in [("c@x", "C"), ("a@x", "A"), ("b@x", "B")] {
            svc.register(candidate(email, name)).await.unwrap();
        }
        let names: Vec<_> = svc.list_all().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
