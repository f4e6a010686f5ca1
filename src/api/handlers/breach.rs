// src/api/handlers/breach.rs

use actix_web::{web, HttpResponse};
use crate::api::AppState;
use crate::api::types::{ErrorResponse, PasswordBreachRequest};
use crate::services::BreachReport;
use log::error;

/// Check a password against known breaches
///
/// Uses a k-anonymity range lookup: only the first five characters of the
/// password's SHA-1 hash are sent to the breach service.
#[utoipa::path(
    post,
    path = "/api/security/breach",
    tag = "Security",
    request_body = PasswordBreachRequest,
    responses(
        (status = 200, description = "Breach lookup result", body = BreachReport),
        (status = 500, description = "Breach service unavailable", body = ErrorResponse)
    )
)]
pub async fn check_breach(
    state: web::Data<AppState>,
    breach_req: web::Json<PasswordBreachRequest>,
) -> HttpResponse {
    match state.breach_checker.check(&breach_req.password).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!("Breach lookup failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Error checking password breach: {}",
                e
            )))
        }
    }
}
