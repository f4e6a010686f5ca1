// src/api/handlers/system.rs
use actix_web::HttpResponse;
use crate::api::types::{HealthResponse, RootResponse};

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Server is running", body = RootResponse)
    )
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "PassVault Guard API is running".to_string(),
    })
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
