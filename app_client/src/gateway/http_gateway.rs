use crate::errors::ClientError;
use crate::gateway::ChatGateway;
use async_trait::async_trait;
use common::config::ClientConfig;
use common::models::{Credentials, Message, NewAccount, SendMessage, UserProfile};
use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;

/// `{success, user}` 或 `{error}`
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    success: bool,
    user: Option<UserProfile>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

/// 基于 reqwest 的后端调用
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), &config.backend_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn read_user(resp: Response, fallback: &str) -> Result<UserProfile, ClientError> {
        let status = resp.status().as_u16();
        let body: UserEnvelope = resp.json().await?;
        match body {
            UserEnvelope { success: true, user: Some(user), .. } => Ok(user),
            UserEnvelope { error, .. } => {
                Err(ClientError::Rejected { status, message: error.unwrap_or_else(|| fallback.to_string()) })
            }
        }
    }

    async fn ensure_success(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| status.to_string());
        Err(ClientError::Rejected { status: status.as_u16(), message })
    }
}

#[async_trait]
impl ChatGateway for HttpGateway {
    async fn register(&self, account: &NewAccount) -> Result<UserProfile, ClientError> {
        let resp = self.client.post(self.url("/register")).json(account).send().await?;
        Self::read_user(resp, "Registration failed").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError> {
        let resp = self.client.post(self.url("/login")).json(credentials).send().await?;
        Self::read_user(resp, "Login failed").await
    }

    async fn list_users(&self) -> Result<Vec<UserProfile>, ClientError> {
        let resp = self.client.get(self.url("/users")).send().await?;
        Ok(Self::ensure_success(resp).await?.json().await?)
    }

    async fn send_message(&self, message: &SendMessage) -> Result<(), ClientError> {
        let resp = self.client.post(self.url("/message")).json(message).send().await?;
        Self::ensure_success(resp).await?;
        debug!("message sent {} -> {}", message.from, message.to);
        Ok(())
    }

    async fn list_messages(&self, from: &str, to: &str) -> Result<Vec<Message>, ClientError> {
        let resp = self.client.get(self.url("/messages")).query(&[("from", from), ("to", to)]).send().await?;
        Ok(Self::ensure_success(resp).await?.json().await?)
    }
}
