use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::ResetPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub token: String,
    #[schema(example = "newSecret123")]
    pub password: String,
}

/// Consume a reset token and set a new password
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Token invalid or expired, or weak password", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.auth.reset_password.execute(&dto.token, &dto.password).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::ok()
        }

        Err(ResetPasswordError::InvalidOrExpiredToken) => {
            warn!("Password reset with invalid or expired token");
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid or expired reset token")
        }

        Err(ResetPasswordError::WeakPassword(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
