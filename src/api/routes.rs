// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::system::root))
        .route("/health", web::get().to(handlers::system::health_check));

    // Password security tools
    cfg.service(
        web::scope("/api/security")
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::strength::analyze_password_strength))
            .route("/breach", web::post().to(handlers::breach::check_breach))
    );
}
