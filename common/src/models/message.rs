use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 单聊消息，写入后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    /// 发送者邮箱
    pub from: String,
    /// 接收者邮箱
    pub to: String,
    pub text: String,
    /// 服务端写入时间
    pub date: DateTime<Utc>,
}

impl Message {
    /// 是否属于 a、b 之间的会话（不区分方向）
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// 发送消息请求体
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SendMessage {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub text: String,
}

/// 会话查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConversationQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}
