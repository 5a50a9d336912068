use actix_web::{Responder, get, web};
use common::errors::AppError;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(status);
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Common",
    summary = "Get the status of the service",
    responses(
        (status = 200, description = "服务正常")
    )
)]
#[get("/status")]
pub async fn status() -> Result<impl Responder, AppError> {
    Ok(web::Json(json!({"code": 200})))
}
