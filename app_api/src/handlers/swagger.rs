use crate::handlers::auth_handler::*;
use crate::handlers::common_handler::*;
use crate::handlers::message_handler::*;
use crate::handlers::user_handler::*;
use crate::result::{ApiResponse, UserResponse};
use actix_web::{HttpResponse, Responder, get, web};
use common::errors::AppError;
use common::models::{Credentials, Gender, Message, NewAccount, SendMessage, UserProfile};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        status,
        //账号
        auth_register,
        auth_login,
        //用户
        user_list,
        //消息
        send_message,
        list_messages,
    ),
    components(schemas(
        ApiResponse,
        UserResponse,
        UserProfile,
        NewAccount,
        Credentials,
        Gender,
        Message,
        SendMessage,
    )),
    tags(
        (name = "Auth", description = "注册与登录"),
        (name = "User", description = "推荐用户"),
        (name = "Message", description = "单聊消息"),
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/openapi.json")]
async fn openapi_json() -> Result<impl Responder, AppError> {
    let body = ApiDoc::openapi().to_json()?;
    Ok(HttpResponse::Ok().content_type("application/json").body(body))
}
