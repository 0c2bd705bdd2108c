use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::incoming::use_cases::{RegisterUserError, RegisterUserRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    #[schema(example = "Rahim Uddin")]
    pub name: String,
    #[schema(example = "rahim@example.com")]
    pub email: String,
    #[schema(example = "secret123")]
    pub password: String,
}

/// Body of a successful register, login or OAuth completion.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user: PublicUser,
    /// HS256 bearer token
    pub access_token: String,
}

/// Create an account
///
/// New accounts start with an empty wallet.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Account created", body = SessionResponse),
        (status = 400, description = "Duplicate email or invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterUserRequest::new(dto.name, dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => {
            warn!("Registration rejected: {}", e);
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.auth.register.execute(request).await {
        Ok(session) => ApiResponse::success(SessionResponse {
            user: session.user,
            access_token: session.access_token,
        }),

        Err(RegisterUserError::DuplicateEmail) => {
            ApiResponse::bad_request("DUPLICATE_EMAIL", "Email already exists")
        }

        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
