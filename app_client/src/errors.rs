use thiserror::Error;

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 表单未通过本地校验，未发出任何请求
    #[error("{0}")]
    Validation(String),

    /// 后端拒绝（400 用户已存在、401 凭证错误等）
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not logged in")]
    NotAuthenticated,
}
