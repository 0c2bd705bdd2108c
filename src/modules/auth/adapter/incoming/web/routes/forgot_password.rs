use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::RequestPasswordResetError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    #[schema(example = "rahim@example.com")]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponse {
    /// Raw reset token, only outside production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_token: Option<String>,
}

/// Issue a password reset token
///
/// The token is mailed to the account holder. Outside production it is also
/// echoed back as `debugToken`.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset link dispatched", body = ForgotPasswordResponse),
        (status = 404, description = "No account with that email", body = ErrorResponse),
        (status = 502, description = "Mail delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = req.into_inner().email;
    if email.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email is required");
    }

    match data.auth.request_password_reset.execute(&email).await {
        Ok(issued) => {
            let debug_token = data.expose_reset_token.then_some(issued.token);
            ApiResponse::success_with_message(
                ForgotPasswordResponse { debug_token },
                "Password reset link sent to your email",
            )
        }

        Err(RequestPasswordResetError::AccountNotFound) => {
            warn!("Password reset requested for unknown email");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "No account found with that email")
        }

        Err(RequestPasswordResetError::NotificationFailed(e)) => {
            error!(error = %e, "Password reset email failed");
            ApiResponse::bad_gateway("EMAIL_FAILED", "Could not send the reset email")
        }

        Err(e) => {
            error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}
