//! 客户端会话控制器
//!
//! 两个状态：未登录 → 已登录（注册或登录成功后切换，不会退回）。
//! 已登录时可选中一个聊天对象，选中即拉取双方历史消息。
//! 发消息先写本地视图再转发后端，失败只标记，不回滚。

use crate::errors::ClientError;
use crate::forms::{LoginForm, RegisterForm};
use crate::gateway::ChatGateway;
use crate::matcher::{AgeBound, Candidate, FilterCriteria, filter_candidates};
use chrono::{DateTime, Utc};
use common::UserId;
use common::models::{Coordinates, Message, SendMessage, UserProfile};
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(UserProfile),
}

/// 本地消息的投递状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// 已转发，等待后端确认
    Pending,
    /// 后端已接收（历史消息均为此状态）
    Sent,
    /// 转发失败，仍保留在本地视图
    Failed,
    /// 仅本地提示，不会发往后端
    Local,
}

/// 聊天窗口中的一条记录
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub from: String,
    pub to: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub delivery: Delivery,
}

impl From<Message> for ChatEntry {
    fn from(m: Message) -> Self {
        Self { from: m.from, to: m.to, text: m.text, date: m.date, delivery: Delivery::Sent }
    }
}

/// 本地资料修改，`None` 表示该项不变
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEdit {
    pub photo: Option<String>,
    pub age: Option<u32>,
    pub description: Option<String>,
}

pub struct Session<G: ChatGateway> {
    gateway: G,
    state: SessionState,
    location: Option<Coordinates>,
    criteria: FilterCriteria,
    suggestions: Vec<UserProfile>,
    favorites: Vec<UserProfile>,
    partner: Option<UserProfile>,
    messages: Vec<ChatEntry>,
    description: Option<String>,
}

impl<G: ChatGateway> Session<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: SessionState::Unauthenticated,
            location: None,
            criteria: FilterCriteria::default(),
            suggestions: Vec::new(),
            favorites: Vec::new(),
            partner: None,
            messages: Vec::new(),
            description: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    fn require_user(&self) -> Result<&UserProfile, ClientError> {
        self.current_user().ok_or(ClientError::NotAuthenticated)
    }

    /// 设备定位结果；拿不到时保持 `None`
    pub fn set_location(&mut self, location: Option<Coordinates>) {
        self.location = location;
    }

    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    pub async fn login(&mut self, form: &LoginForm) -> Result<&UserProfile, ClientError> {
        let credentials = form.check()?;
        let user = self.gateway.login(&credentials).await?;
        info!("logged in as {}", user.email);
        self.state = SessionState::Authenticated(user);
        self.require_user()
    }

    /// 注册时附带当前定位
    pub async fn register(&mut self, form: &RegisterForm) -> Result<&UserProfile, ClientError> {
        let account = form.check(self.location)?;
        let user = self.gateway.register(&account).await?;
        info!("registered as {}", user.email);
        self.state = SessionState::Authenticated(user);
        self.require_user()
    }

    /// 拉取用户列表并去掉自己
    pub async fn refresh_suggestions(&mut self) -> Result<usize, ClientError> {
        let me = self.require_user()?.email.clone();
        let users = self.gateway.list_users().await?;
        self.suggestions = users.into_iter().filter(|u| u.email != me).collect();
        Ok(self.suggestions.len())
    }

    /// 当前条件下的推荐
    pub fn suggestions(&self) -> Vec<Candidate> {
        filter_candidates(&self.suggestions, self.location, &self.criteria)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// 直接修改条件，不做夹取
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn adjust_filter(&mut self, bound: AgeBound, step: i32) {
        self.criteria.step(bound, step);
    }

    pub fn partner(&self) -> Option<&UserProfile> {
        self.partner.as_ref()
    }

    pub fn messages(&self) -> &[ChatEntry] {
        &self.messages
    }

    /// 选中聊天对象并用双方历史替换当前消息视图
    pub async fn select_partner(&mut self, partner: &UserProfile) -> Result<usize, ClientError> {
        let me = self.require_user()?.email.clone();
        let history = self.gateway.list_messages(&me, &partner.email).await?;
        debug!("loaded {} messages with {}", history.len(), partner.email);
        // 拉取成功才切换，失败时保留原对象与原消息
        self.partner = Some(partner.clone());
        self.messages = history.into_iter().map(ChatEntry::from).collect();
        Ok(self.messages.len())
    }

    /// 空白内容或未选中对象时什么也不做，返回 `Ok(false)`
    pub async fn send_message(&mut self, text: &str) -> Result<bool, ClientError> {
        let me = self.require_user()?.email.clone();
        let Some(partner) = self.partner.as_ref() else {
            return Ok(false);
        };
        if text.trim().is_empty() {
            return Ok(false);
        }
        let payload = SendMessage { from: me, to: partner.email.clone(), text: text.to_string() };

        let idx = self.messages.len();
        self.messages.push(ChatEntry {
            from: payload.from.clone(),
            to: payload.to.clone(),
            text: payload.text.clone(),
            date: Utc::now(),
            delivery: Delivery::Pending,
        });

        match self.gateway.send_message(&payload).await {
            Ok(()) => {
                self.messages[idx].delivery = Delivery::Sent;
                Ok(true)
            }
            Err(e) => {
                warn!("send to {} failed: {}", payload.to, e);
                self.messages[idx].delivery = Delivery::Failed;
                Err(e)
            }
        }
    }

    pub fn favorites(&self) -> &[UserProfile] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: UserId) -> bool {
        self.favorites.iter().any(|f| f.id == id)
    }

    /// 收藏候选人并在本地消息里加一条提示；已收藏则返回 false
    pub fn like(&mut self, candidate: &UserProfile) -> Result<bool, ClientError> {
        let user = self.require_user()?;
        let me = user.email.clone();
        let my_name = if user.name.is_empty() { "Someone".to_string() } else { user.name.clone() };
        if self.is_favorite(candidate.id) {
            return Ok(false);
        }
        self.favorites.push(candidate.clone());
        self.messages.push(ChatEntry {
            from: candidate.name.clone(),
            to: me,
            text: format!("{my_name} liked you!"),
            date: Utc::now(),
            delivery: Delivery::Local,
        });
        Ok(true)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// 只改本地资料（照片、年龄、简介），不会同步到后端
    pub fn update_local_profile(&mut self, edit: ProfileEdit) -> Result<(), ClientError> {
        let SessionState::Authenticated(user) = &mut self.state else {
            return Err(ClientError::NotAuthenticated);
        };
        if let Some(photo) = edit.photo {
            user.photo = Some(photo);
        }
        if edit.age.is_some() {
            user.age = edit.age;
        }
        if let Some(description) = edit.description {
            self.description = Some(description);
        }
        Ok(())
    }
}
