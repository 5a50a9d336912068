use crate::result::AppState;
use actix_web::{Responder, get, web};
use common::errors::AppError;
use common::models::UserProfile;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(user_list);
}

/// 全部用户（推荐候选），不含密码，不分页
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "User",
    responses((status = 200, description = "用户列表", body = Vec<UserProfile>))
)]
#[get("/users")]
pub async fn user_list(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let users = state.user_service.list_all().await?;
    Ok(web::Json(users))
}
