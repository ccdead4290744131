// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.service(
        web::scope("/api")
            .route("/generate", web::get().to(handlers::generator::generate_password))
    );
}
