pub mod auth_handler;
pub mod common_handler;
pub mod message_handler;
pub mod swagger;
pub mod user_handler;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(common_handler::configure)
            .configure(auth_handler::configure)
            .configure(user_handler::configure)
            .configure(message_handler::configure),
    );
    swagger::configure(cfg);
}
