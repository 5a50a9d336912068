use crate::errors::AppError;
use config::Config;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::sync::Arc;

/// 应用配置，所有段均可缺省
///
/// 加载顺序：`<file>.toml`（可不存在）→ 环境变量 `APP__<SECTION>__<KEY>`，
/// 例如 `APP__SERVER__PORT=8080`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
    pub client: Option<ClientConfig>,
}

impl AppConfig {
    pub fn new(file: &str) -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;
        let cfg = config.try_deserialize::<AppConfig>()?;
        Ok(cfg)
    }

    pub fn init(file: &str) -> Result<(), AppError> {
        let instance = Self::new(file)?;
        INSTANCE
            .set(Arc::new(instance))
            .map_err(|_| AppError::Internal("config already initialized".to_string()))
    }

    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
    pub fn get_client(&self) -> ClientConfig {
        self.client.clone().unwrap_or_default()
    }

    /// 获取单例，未 init 时退回默认配置
    pub fn get() -> Arc<Self> {
        INSTANCE.get_or_init(|| Arc::new(AppConfig::default())).clone()
    }
}

static INSTANCE: OnceCell<Arc<AppConfig>> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3001 }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SysConfig {
    //全局日志级别，RUST_LOG 优先
    pub log_level: String,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    /// 后端根地址，不带 `/api`
    pub backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { backend_url: "http://127.0.0.1:3001".to_string() }
    }
}
