use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use app_api::result::AppState;
use common::config::AppConfig;
use log::warn;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 读取配置文件
    AppConfig::init("api-config").map_err(|e| std::io::Error::other(e.to_string()))?;
    let app_cfg = AppConfig::get();
    //初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(app_cfg.get_sys().log_level)).init();

    let address_and_port = app_cfg.get_server().address();
    warn!("Starting server on {}", address_and_port);
    let state = web::Data::new(AppState::new());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            // 配置 控制器
            .configure(handlers::configure)
    })
    .bind(address_and_port)?
    .run()
    .await
}
