use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::register_user::SessionResponse;
use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "rahim@example.com")]
    pub email: String,
    #[schema(example = "secret123")]
    pub password: String,
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(session) => ApiResponse::success(SessionResponse {
            user: session.user,
            access_token: session.access_token,
        }),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
