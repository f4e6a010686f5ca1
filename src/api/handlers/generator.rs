// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use crate::api::AppState;
use crate::api::types::{ErrorResponse, PasswordGenerationRequest};
use crate::generators::GeneratorError;
use crate::models::GenerationResult;
use log::{error, warn};

/// Generate a secure password
///
/// Generates a password containing every selected character class, along with
/// its theoretical entropy in bits.
#[utoipa::path(
    post,
    path = "/api/security/generate",
    tag = "Security",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerationResult),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let request = generation_req.into_inner().into_request(state.default_password_length);

    match state.generator.generate(&request) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(GeneratorError::InvalidRequest(reason)) => {
            warn!("Rejected password generation request: {}", reason);
            HttpResponse::BadRequest().json(ErrorResponse::new(reason))
        }
        Err(e) => {
            error!("Password generation failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Error generating password"))
        }
    }
}
