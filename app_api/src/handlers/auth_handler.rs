use crate::result::{AppState, UserResponse, result_user};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use common::models::{Credentials, NewAccount};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_register);
    cfg.service(auth_login);
}

/// 用户注册
///
/// email 已存在时返回 400
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Auth",
    request_body = NewAccount,
    responses(
        (status = 200, description = "注册成功", body = UserResponse),
        (status = 400, description = "用户已存在"),
    )
)]
#[post("/register")]
pub async fn auth_register(state: web::Data<AppState>, dto: web::Json<NewAccount>) -> Result<impl Responder, AppError> {
    let account = state.user_service.register(dto.into_inner()).await?;
    Ok(web::Json(result_user(account.to_profile())))
}

/// 用户登录
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "登录成功", body = UserResponse),
        (status = 401, description = "邮箱或密码错误"),
    )
)]
#[post("/login")]
pub async fn auth_login(state: web::Data<AppState>, dto: web::Json<Credentials>) -> Result<impl Responder, AppError> {
    let account = state.user_service.authenticate(&dto.email, &dto.password).await?;
    Ok(web::Json(result_user(account.to_profile())))
}
