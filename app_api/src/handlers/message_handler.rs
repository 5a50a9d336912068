use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, get, post, web};
use common::errors::AppError;
use common::models::{ConversationQuery, Message, SendMessage};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(send_message);
    cfg.service(list_messages);
}

/// 发送消息；不校验收发双方是否存在，也不校验内容
#[utoipa::path(
    post,
    path = "/api/message",
    tag = "Message",
    request_body = SendMessage,
    responses((status = 200, description = "已写入", body = ApiResponse))
)]
#[post("/message")]
pub async fn send_message(state: web::Data<AppState>, dto: web::Json<SendMessage>) -> Result<impl Responder, AppError> {
    state.message_service.append(&dto.from, &dto.to, &dto.text).await?;
    Ok(web::Json(result()))
}

/// 两个用户之间的消息（双向，时间顺序）
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "Message",
    params(ConversationQuery),
    responses((status = 200, description = "会话消息", body = Vec<Message>))
)]
#[get("/messages")]
pub async fn list_messages(
    state: web::Data<AppState>,
    query: web::Query<ConversationQuery>,
) -> Result<impl Responder, AppError> {
    let chat = state.message_service.list_between(&query.from, &query.to).await?;
    Ok(web::Json(chat))
}
