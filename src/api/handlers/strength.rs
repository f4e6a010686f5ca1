// src/api/handlers/strength.rs

use actix_web::{web, HttpResponse};
use crate::api::types::PasswordStrengthRequest;
use crate::services::strength::{check_password_strength, StrengthReport, UserContext};

/// Analyze password strength
///
/// Scores the password from 0 to 4 and returns crack-time estimates and
/// feedback. Names and email supplied with the request count against the
/// password when they appear in it.
#[utoipa::path(
    post,
    path = "/api/security/strength",
    tag = "Security",
    request_body = PasswordStrengthRequest,
    responses(
        (status = 200, description = "Password strength report", body = StrengthReport)
    )
)]
pub async fn analyze_password_strength(
    strength_req: web::Json<PasswordStrengthRequest>,
) -> HttpResponse {
    let PasswordStrengthRequest { password, first_name, last_name, email } = strength_req.into_inner();
    let context = UserContext { first_name, last_name, email };

    HttpResponse::Ok().json(check_password_strength(&password, &context))
}
