use actix_web::web;
use crate::web::handlers;

// Every path and method lands on the one handler
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(handlers::dispatch));
}
